//! LUME brand palette and page furniture shared by both documents.

use crate::model::{Color, Element, Face, Rect, Text, TextStyle};

pub const CORAL: Color = Color::Rgb(255, 81, 73);
pub const CHARCOAL: Color = Color::Rgb(26, 26, 26);
pub const DARK_GRAY: Color = Color::Rgb(43, 50, 58);
pub const GRAY: Color = Color::Rgb(107, 107, 107);
pub const LIGHT_GRAY: Color = Color::Rgb(240, 240, 240);
pub const CREAM: Color = Color::Rgb(250, 250, 250);
pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const BLACK: Color = Color::Rgb(0, 0, 0);

/// Neutral greys used for secondary copy on dark pages.
pub const SILVER: Color = Color::Greyscale(178);
pub const STONE: Color = Color::Greyscale(128);
pub const MIST: Color = Color::Greyscale(204);
/// Chapter numbers printed behind the chapter band.
pub const WATERMARK: Color = Color::Greyscale(242);

/// Website printed in the footers.
pub const SITE: &str = "thelumeproject.com";

/// Shorthand for a text style.
pub const fn style(face: Face, size: f64, color: Color) -> TextStyle {
    TextStyle::new(face, size, color)
}

/// A full-width accent bar hanging from the top edge of the page.
pub fn top_rule(page_width: f64, page_height: f64, thickness: f64) -> Element {
    Rect::filled(0.0, page_height - thickness, page_width, thickness, CORAL).into()
}

/// A text run at absolute coordinates.
pub fn text(content: &str, x: f64, y: f64, style: TextStyle) -> Element {
    Text::new(content, x, y, style).into()
}
