//! Advance widths for the PDF standard-14 fonts used by the lead magnets.
//!
//! Values are the AFM widths in thousandths of an em. Each table covers ASCII 0x20..=0x7E, index =
//! `(char as usize) - 32`; the handful of typographic characters that appear in the copy (bullet,
//! dashes, curly quotes, ellipsis) are listed separately.

use printpdf::BuiltinFont;

/// Standard-14 faces with built-in metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Helvetica.
    Helvetica,
    /// Helvetica-Bold.
    HelveticaBold,
    /// Times-Bold.
    TimesBold,
    /// Times-Italic.
    TimesItalic,
}

impl StandardFont {
    /// The `printpdf` built-in font referenced in the output.
    pub fn builtin(self) -> BuiltinFont {
        match self {
            Self::Helvetica => BuiltinFont::Helvetica,
            Self::HelveticaBold => BuiltinFont::HelveticaBold,
            Self::TimesBold => BuiltinFont::TimesBold,
            Self::TimesItalic => BuiltinFont::TimesItalic,
        }
    }

    /// PostScript name of the face.
    pub fn name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
        }
    }

    fn table(self) -> &'static [u16; 95] {
        match self {
            Self::Helvetica => &HELVETICA,
            Self::HelveticaBold => &HELVETICA_BOLD,
            Self::TimesBold => &TIMES_BOLD,
            Self::TimesItalic => &TIMES_ITALIC,
        }
    }

    /// Advance width of `c` in thousandths of an em.
    ///
    /// Characters outside the table fall back to the width of a lowercase `n`.
    pub fn char_width(self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.table()[code - 32];
        }

        let serif = matches!(self, Self::TimesBold | Self::TimesItalic);
        match c {
            '\u{2022}' => 350,
            '\u{2013}' => {
                if serif {
                    500
                } else {
                    556
                }
            }
            '\u{2014}' | '\u{2026}' => {
                if self == Self::TimesItalic {
                    889
                } else {
                    1000
                }
            }
            '\u{2018}' | '\u{2019}' => match self {
                Self::Helvetica => 222,
                Self::HelveticaBold => 278,
                Self::TimesBold | Self::TimesItalic => 333,
            },
            '\u{201C}' | '\u{201D}' => match self {
                Self::Helvetica => 333,
                Self::HelveticaBold => 500,
                Self::TimesBold => 500,
                Self::TimesItalic => 556,
            },
            _ => self.char_width('n'),
        }
    }

    /// Width of `text` in points when set at `size` points.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        f64::from(units) * size / 1000.0
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 675, 675, 675, 500, 920,
    611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
    667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
    389, 278, 389, 422, 500, 333,
    500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
    500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
    400, 275, 400, 541,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_matches_afm_widths() {
        // H e l l o = 722 + 556 + 222 + 222 + 556
        assert!((StandardFont::Helvetica.text_width("Hello", 10.0) - 22.78).abs() < 1e-9);
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.char_width('@'), 1015);
        assert_eq!(StandardFont::Helvetica.char_width('~'), 584);
    }

    #[test]
    fn bold_faces_are_wider() {
        let text = "Quality over quantity";
        assert!(
            StandardFont::HelveticaBold.text_width(text, 12.0)
                > StandardFont::Helvetica.text_width(text, 12.0)
        );
    }

    #[test]
    fn typographic_characters_have_widths() {
        assert_eq!(StandardFont::Helvetica.char_width('\u{2022}'), 350);
        assert_eq!(StandardFont::TimesBold.char_width('\u{2014}'), 1000);
        assert_eq!(StandardFont::TimesItalic.char_width('\u{2014}'), 889);
        assert_eq!(StandardFont::HelveticaBold.char_width('\u{2013}'), 556);
    }

    #[test]
    fn unknown_characters_fall_back_to_n() {
        assert_eq!(
            StandardFont::TimesItalic.char_width('\u{00E9}'),
            StandardFont::TimesItalic.char_width('n')
        );
    }

    #[test]
    fn empty_text_is_zero_width() {
        assert_eq!(StandardFont::TimesBold.text_width("", 48.0), 0.0);
    }
}
