use lead_magnets::fonts::standard::StandardFont;
use lead_magnets::{layout_paragraph, wrap};
use proptest::prelude::*;

fn six_per_char(text: &str, _size: f64) -> f64 {
    text.chars().count() as f64 * 6.0
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z,.']{1,12}", 1..40)
}

proptest! {
    #[test]
    fn joining_lines_restores_the_text(words in words(), max_width in 0.0f64..400.0) {
        let text = words.join(" ");
        let lines = wrap(&text, &six_per_char, 12.0, max_width);
        prop_assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn lines_fit_when_every_word_fits(words in words(), extra in 0.0f64..300.0) {
        let widest = words
            .iter()
            .map(|word| six_per_char(word, 12.0))
            .fold(0.0, f64::max);
        let max_width = widest + extra;

        for line in wrap(&words.join(" "), &six_per_char, 12.0, max_width) {
            prop_assert!(six_per_char(&line, 12.0) <= max_width, "{:?} overflows", line);
            prop_assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
    }

    #[test]
    fn lines_are_filled_greedily(words in words(), max_width in 30.0f64..400.0) {
        let lines = wrap(&words.join(" "), &six_per_char, 12.0, max_width);
        for pair in lines.windows(2) {
            let next_word = pair[1].split(' ').next().unwrap_or_default();
            let extended = format!("{} {}", pair[0], next_word);
            prop_assert!(six_per_char(&extended, 12.0) > max_width);
        }
    }

    #[test]
    fn wider_columns_never_need_more_lines(
        words in words(),
        narrow in 0.0f64..300.0,
        widen in 0.0f64..300.0,
    ) {
        let text = words.join(" ");
        let narrow_lines = wrap(&text, &six_per_char, 12.0, narrow).len();
        let wide_lines = wrap(&text, &six_per_char, 12.0, narrow + widen).len();
        prop_assert!(wide_lines <= narrow_lines);
    }

    #[test]
    fn standard_metrics_keep_lines_inside_the_column(words in words(), size in 8.0f64..24.0) {
        let metrics = |text: &str, size: f64| StandardFont::Helvetica.text_width(text, size);
        let widest = words
            .iter()
            .map(|word| metrics(word, size))
            .fold(0.0, f64::max);
        let max_width = widest.max(475.0);

        for line in wrap(&words.join(" "), &metrics, size, max_width) {
            prop_assert!(metrics(&line, size) <= max_width + 1e-9);
        }
    }

    #[test]
    fn baselines_step_down_by_the_line_height(
        words in words(),
        y_start in 100.0f64..842.0,
        line_height in 10.0f64..30.0,
    ) {
        let layout = layout_paragraph(
            &words.join(" "),
            60.0,
            y_start,
            &six_per_char,
            12.0,
            200.0,
            line_height,
        );

        for (index, line) in layout.lines.iter().enumerate() {
            prop_assert_eq!(line.x, 60.0);
            prop_assert!((line.y - (y_start - line_height * index as f64)).abs() < 1e-9);
        }
        let expected_end = y_start - line_height * layout.line_count() as f64;
        prop_assert!((layout.y_end - expected_end).abs() < 1e-9);
    }
}
