//! Turns declarative pages into flat display lists.
//!
//! [`compose_page`] walks a page's blocks with an explicit vertical cursor, wraps every paragraph
//! and list body through [`crate::layout`], and resolves all relative positions into absolute
//! [`DrawOp`]s. The PDF backend in [`crate::builder`] only paints the result.

use log::trace;

use crate::fonts::FontSet;
use crate::layout::layout_paragraph;
use crate::model::{Block, Element, Group, List, Page, PageSize, Paragraph, Rect, Text};

/// A primitive with absolute coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect(Rect),
    Text(Text),
}

impl DrawOp {
    /// The text run, if this is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rect(_) => None,
        }
    }

    /// The rectangle, if this is one.
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(rect) => Some(rect),
            Self::Text(_) => None,
        }
    }
}

/// Lays out `page` and returns its display list in drawing order.
///
/// The background, when present, comes first and covers the whole page. The cursor starts at
/// the top edge of the page.
pub fn compose_page(page: &Page, fonts: &FontSet, size: PageSize) -> Vec<DrawOp> {
    let mut composer = Composer {
        fonts,
        cursor: size.height,
        ops: Vec::new(),
    };

    if let Some(color) = page.background() {
        composer.ops.push(DrawOp::Rect(Rect::filled(
            0.0,
            0.0,
            size.width,
            size.height,
            color,
        )));
    }

    for block in page.blocks() {
        composer.block(block);
    }

    trace!(
        "Composed page with {} draw operations, cursor ends at {}",
        composer.ops.len(),
        composer.cursor
    );
    composer.ops
}

struct Composer<'a> {
    fonts: &'a FontSet,
    cursor: f64,
    ops: Vec<DrawOp>,
}

impl Composer<'_> {
    fn block(&mut self, block: &Block) {
        match block {
            Block::MoveTo(y) => self.cursor = *y,
            Block::Gap(dy) => self.cursor -= dy,
            Block::Fixed(element) => self.element(element, 0.0),
            Block::Flow(paragraph) => self.cursor = self.paragraph(paragraph, self.cursor),
            Block::List(list) => self.list(list),
            Block::Group(group) => self.group(group),
        }
    }

    fn element(&mut self, element: &Element, origin: f64) {
        match element {
            Element::Rect(rect) => self.ops.push(DrawOp::Rect(rect.offset(origin))),
            Element::Text(text) => self.ops.push(DrawOp::Text(text.clone().offset(origin))),
            Element::Paragraph { paragraph, y } => {
                self.paragraph(paragraph, origin + y);
            }
        }
    }

    /// Places `paragraph` from `y` downwards and returns the y below its last line.
    fn paragraph(&mut self, paragraph: &Paragraph, y: f64) -> f64 {
        let fonts = self.fonts;
        let column = &paragraph.column;
        let metrics = fonts.metrics(column.style.face);
        let layout = layout_paragraph(
            &paragraph.text,
            column.x,
            y,
            &metrics,
            column.style.size,
            column.width,
            column.line_height,
        );

        self.ops.extend(
            layout
                .lines
                .into_iter()
                .map(|line| DrawOp::Text(Text::new(line.text, line.x, line.y, column.style))),
        );
        layout.y_end
    }

    fn group(&mut self, group: &Group) {
        let origin = self.cursor;
        for element in group.elements() {
            self.element(element, origin);
        }
        self.cursor -= group.advance();
    }

    fn list(&mut self, list: &List) {
        for (index, item) in list.items().iter().enumerate() {
            let mut y = self.cursor;

            if let Some(marker) = list.marker() {
                self.ops.push(DrawOp::Text(Text::new(
                    marker.label(index),
                    marker.x,
                    y + marker.dy,
                    marker.style,
                )));
            }

            if let (Some(placement), Some(title)) = (list.title(), item.title.as_deref()) {
                self.ops.push(DrawOp::Text(Text::new(
                    title,
                    placement.x,
                    y,
                    placement.style,
                )));
                y -= placement.advance;
            }

            y = self.paragraph(&list.body().paragraph(item.body.as_str()), y);
            self.cursor = y - list.spacing();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Face, ListItem, Marker, TextColumn, TextStyle};

    const BODY: TextStyle = TextStyle::new(Face::Body, 12.0, Color::Greyscale(0));
    const BOLD: TextStyle = TextStyle::new(Face::BodyBold, 12.0, Color::Greyscale(0));

    fn texts(ops: &[DrawOp]) -> Vec<(&str, f64, f64)> {
        ops.iter()
            .filter_map(DrawOp::as_text)
            .map(|text| (text.content.as_str(), text.x, text.y))
            .collect()
    }

    #[test]
    fn background_is_drawn_first_over_the_whole_page() {
        let page = Page::new()
            .with_background(Color::Rgb(26, 26, 26))
            .with_block(Block::fixed(Text::new("LUME", 60.0, 762.0, BODY)));

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[0].as_rect(),
            Some(&Rect::filled(0.0, 0.0, 595.0, 842.0, Color::Rgb(26, 26, 26)))
        );
        assert_eq!(texts(&ops), vec![("LUME", 60.0, 762.0)]);
    }

    #[test]
    fn groups_are_relative_to_the_cursor() {
        let page = Page::new()
            .with_block(Block::MoveTo(700.0))
            .with_block(
                Group::new(32.0)
                    .with(Rect::filled(40.0, -12.0, 14.0, 14.0, Color::Greyscale(255)))
                    .with(Text::new("item", 62.0, -9.0, BOLD)),
            )
            .with_block(Block::line("next", 62.0, BODY, 0.0));

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(ops[0].as_rect().map(|rect| rect.y), Some(688.0));
        assert_eq!(texts(&ops), vec![("item", 62.0, 691.0), ("next", 62.0, 668.0)]);
    }

    #[test]
    fn flow_moves_the_cursor_below_the_paragraph() {
        let column = TextColumn::new(60.0, 475.0, BODY, 20.0);
        let page = Page::new()
            .with_block(Block::MoveTo(622.0))
            .with_block(Block::flow(column, "short text"))
            .with_block(Block::Gap(20.0))
            .with_block(Block::flow(column, "second"));

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(
            texts(&ops),
            vec![("short text", 60.0, 622.0), ("second", 60.0, 582.0)]
        );
    }

    #[test]
    fn empty_flow_keeps_the_cursor() {
        let column = TextColumn::new(60.0, 475.0, BODY, 20.0);
        let page = Page::new()
            .with_block(Block::MoveTo(500.0))
            .with_block(Block::flow(column, ""))
            .with_block(Block::line("after", 60.0, BODY, 0.0));

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(texts(&ops), vec![("after", 60.0, 500.0)]);
    }

    #[test]
    fn list_items_place_marker_title_and_body() {
        let list = List::new(TextColumn::new(90.0, 400.0, BODY, 18.0))
            .with_marker(Marker::numbered(60.0, BOLD).counting_from(4, "").raised(5.0))
            .with_title(90.0, BOLD, 25.0)
            .with_spacing(25.0)
            .with_item(ListItem::titled("CONNECTORS", "one"))
            .with_item(ListItem::titled("RISING STARS", "two"));

        let page = Page::new()
            .with_block(Block::MoveTo(762.0))
            .with_block(list);

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(
            texts(&ops),
            vec![
                ("4", 60.0, 767.0),
                ("CONNECTORS", 90.0, 762.0),
                ("one", 90.0, 737.0),
                ("5", 60.0, 699.0),
                ("RISING STARS", 90.0, 694.0),
                ("two", 90.0, 669.0),
            ]
        );
    }

    #[test]
    fn wrapped_list_bodies_push_following_items_down() {
        let long = "word ".repeat(40);
        let list = List::new(TextColumn::new(75.0, 200.0, BODY, 18.0))
            .with_marker(Marker::glyph("\u{2022}", 60.0, BODY))
            .with_spacing(8.0)
            .with_items([long.trim_end(), "tail"]);

        let ops = compose_page(
            &Page::new().with_block(Block::MoveTo(600.0)).with_block(list),
            &FontSet::standard(),
            PageSize::A4,
        );

        let placed = texts(&ops);
        let body_lines = placed
            .iter()
            .filter(|(content, x, _)| *x == 75.0 && content.starts_with("word"))
            .count();
        assert!(body_lines > 1);

        let tail = placed
            .iter()
            .find(|(content, _, _)| *content == "tail")
            .expect("tail item is drawn");
        assert_eq!(tail.2, 600.0 - 18.0 * body_lines as f64 - 8.0);
    }

    #[test]
    fn fixed_elements_ignore_the_cursor() {
        let page = Page::new()
            .with_block(Block::MoveTo(100.0))
            .with_block(Block::fixed(Text::new("4", 297.5, 40.0, BODY)));

        let ops = compose_page(&page, &FontSet::standard(), PageSize::A4);
        assert_eq!(texts(&ops), vec![("4", 297.5, 40.0)]);
    }
}
