//! Greedy word wrapping and paragraph placement.
//!
//! Everything in this module is pure: the only collaborator is a [`GlyphMetrics`] implementation
//! that reports how wide a string is at a given point size. The page renderer composes these
//! helpers with absolute coordinates and threads the vertical cursor explicitly through
//! [`ParagraphLayout::y_end`].

/// Measures rendered text width in PDF points.
///
/// Implementations must be deterministic and never return a negative width. Appending characters
/// to a string must not make it narrower.
pub trait GlyphMetrics {
    /// Returns the width of `text` when set at `size` points.
    fn width_of_text_at_size(&self, text: &str, size: f64) -> f64;
}

impl<F> GlyphMetrics for F
where
    F: Fn(&str, f64) -> f64,
{
    fn width_of_text_at_size(&self, text: &str, size: f64) -> f64 {
        self(text, size)
    }
}

/// Splits `text` into lines no wider than `max_width`.
///
/// Words are the substrings between single spaces. Lines are filled greedily in one pass; a word
/// that is wider than `max_width` on its own still gets a line of its own and is never split, so
/// the output may overflow but the call never fails. Empty or whitespace-only input yields no
/// lines.
pub fn wrap<M>(text: &str, metrics: &M, font_size: f64, max_width: f64) -> Vec<String>
where
    M: GlyphMetrics + ?Sized,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{} {}", current, word)
        };

        if metrics.width_of_text_at_size(&candidate, font_size) > max_width && !current.is_empty()
        {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A wrapped line annotated with its baseline position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Text of the line.
    pub text: String,
    /// Left edge of the line in points.
    pub x: f64,
    /// Baseline of the line in points, measured from the bottom of the page.
    pub y: f64,
}

/// Result of [`layout_paragraph`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphLayout {
    /// Placed lines in reading order.
    pub lines: Vec<PlacedLine>,
    /// Cursor position directly below the last line.
    pub y_end: f64,
}

impl ParagraphLayout {
    /// Number of placed lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Wraps `text` and stacks the lines downwards from `y_start`.
///
/// The first line sits on `y_start` and every following line `line_height` below its
/// predecessor. The returned `y_end` equals `y_start - line_height * n`, so callers can continue
/// laying out content underneath without measuring the paragraph again.
#[allow(clippy::too_many_arguments)]
pub fn layout_paragraph<M>(
    text: &str,
    x: f64,
    y_start: f64,
    metrics: &M,
    font_size: f64,
    max_width: f64,
    line_height: f64,
) -> ParagraphLayout
where
    M: GlyphMetrics + ?Sized,
{
    let mut y = y_start;
    let lines = wrap(text, metrics, font_size, max_width)
        .into_iter()
        .map(|text| {
            let line = PlacedLine { text, x, y };
            y -= line_height;
            line
        })
        .collect();

    ParagraphLayout { lines, y_end: y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_per_char(text: &str, _size: f64) -> f64 {
        text.chars().count() as f64 * 6.0
    }

    #[test]
    fn wraps_the_reference_sentence() {
        let lines = wrap("The quick brown fox jumps", &six_per_char, 12.0, 36.0);
        assert_eq!(lines, vec!["The", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn keeps_words_together_while_they_fit() {
        let lines = wrap("a bb ccc dddd", &six_per_char, 12.0, 42.0);
        assert_eq!(lines, vec!["a bb", "ccc", "dddd"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("", &six_per_char, 12.0, 100.0).is_empty());
        assert!(wrap("   ", &six_per_char, 12.0, 100.0).is_empty());
    }

    #[test]
    fn double_space_inside_a_line_is_kept() {
        assert_eq!(wrap("a  b", &six_per_char, 12.0, 100.0), vec!["a  b"]);
    }

    #[test]
    fn double_space_at_a_break_is_dropped() {
        let lines = wrap("aaaaaa  b", &six_per_char, 12.0, 36.0);
        assert_eq!(lines, vec!["aaaaaa", "b"]);
    }

    #[test]
    fn trailing_space_survives() {
        assert_eq!(wrap("a ", &six_per_char, 12.0, 100.0), vec!["a "]);
    }

    #[test]
    fn tabs_and_newlines_belong_to_their_word() {
        let lines = wrap("one\ttwo three\nfour", &six_per_char, 12.0, 100.0);
        assert_eq!(lines, vec!["one\ttwo", "three\nfour"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap("incomprehensibilities", &six_per_char, 12.0, 10.0);
        assert_eq!(lines, vec!["incomprehensibilities"]);

        let lines = wrap("ok incomprehensibilities ok", &six_per_char, 12.0, 30.0);
        assert_eq!(lines, vec!["ok", "incomprehensibilities", "ok"]);
    }

    #[test]
    fn non_positive_width_degrades_to_one_word_per_line() {
        let lines = wrap("one two three", &six_per_char, 12.0, 0.0);
        assert_eq!(lines, vec!["one", "two", "three"]);

        let lines = wrap("one two", &six_per_char, 12.0, -5.0);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn font_size_reaches_the_metrics() {
        let scaled = |text: &str, size: f64| text.chars().count() as f64 * size * 0.5;
        assert_eq!(wrap("ab cd", &scaled, 10.0, 25.0), vec!["ab cd"]);
        assert_eq!(wrap("ab cd", &scaled, 20.0, 25.0), vec!["ab", "cd"]);
    }

    #[test]
    fn paragraph_lines_step_down_by_line_height() {
        let layout = layout_paragraph(
            "The quick brown fox jumps",
            60.0,
            600.0,
            &six_per_char,
            12.0,
            36.0,
            20.0,
        );

        assert_eq!(layout.line_count(), 5);
        let ys: Vec<f64> = layout.lines.iter().map(|line| line.y).collect();
        assert_eq!(ys, vec![600.0, 580.0, 560.0, 540.0, 520.0]);
        assert!(layout.lines.iter().all(|line| line.x == 60.0));
        assert_eq!(layout.y_end, 500.0);
    }

    #[test]
    fn empty_paragraph_leaves_cursor_in_place() {
        let layout = layout_paragraph("", 10.0, 321.5, &six_per_char, 12.0, 100.0, 18.0);
        assert!(layout.lines.is_empty());
        assert_eq!(layout.y_end, 321.5);
    }
}
