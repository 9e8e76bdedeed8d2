//! Declarative description of the lead-magnet pages.
//!
//! A [`Document`] is a list of [`Page`]s, and every page is a list of [`Block`]s that are consumed
//! top to bottom by the renderer in [`crate::render`]. Blocks either draw at absolute page
//! coordinates or relative to a vertical cursor that starts at the top edge of the page. All
//! coordinates are PDF points with the origin in the bottom-left corner.

pub use genpdf::style::Color;

/// Typographic role of a run of text.
///
/// The roles are mapped onto concrete fonts by [`crate::fonts::FontSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// Headlines and large numerals.
    Display,
    /// Quotes, subtitles and other accent copy.
    DisplayItalic,
    /// Running text.
    Body,
    /// Emphasised running text, labels and list titles.
    BodyBold,
}

impl Face {
    /// All faces in a fixed order.
    pub const ALL: [Face; 4] = [
        Face::Display,
        Face::DisplayItalic,
        Face::Body,
        Face::BodyBold,
    ];

    /// Whether the face belongs to the display family.
    pub fn is_display(self) -> bool {
        matches!(self, Self::Display | Self::DisplayItalic)
    }

    /// Whether the face is set in bold.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Display | Self::BodyBold)
    }

    /// Whether the face is set in italics.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::DisplayItalic)
    }
}

/// Font role, size in points and colour of a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Typographic role.
    pub face: Face,
    /// Font size in points.
    pub size: f64,
    /// Fill colour of the glyphs.
    pub color: Color,
}

impl TextStyle {
    /// Creates a new text style.
    pub const fn new(face: Face, size: f64, color: Color) -> Self {
        Self { face, size, color }
    }
}

/// Page dimensions in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSize {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl PageSize {
    /// ISO A4 as used by both documents.
    pub const A4: PageSize = PageSize {
        width: 595.0,
        height: 842.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Stroke drawn around a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Stroke colour.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
}

/// An axis-aligned rectangle; `y` is its bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill colour, if the rectangle is filled.
    pub fill: Option<Color>,
    /// Outline, if the rectangle is stroked.
    pub border: Option<Border>,
}

impl Rect {
    /// A filled rectangle without outline.
    pub fn filled(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Some(fill),
            border: None,
        }
    }

    /// Adds an outline and returns the updated rectangle.
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border = Some(Border { color, width });
        self
    }

    /// Returns a copy moved up by `dy`.
    pub fn offset(mut self, dy: f64) -> Self {
        self.y += dy;
        self
    }
}

/// A single run of text set on one baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    pub x: f64,
    /// Baseline position.
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    /// Creates a new text run.
    pub fn new(content: impl Into<String>, x: f64, y: f64, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            style,
        }
    }

    /// Returns a copy moved up by `dy`.
    pub fn offset(mut self, dy: f64) -> Self {
        self.y += dy;
        self
    }
}

/// Horizontal placement and typography of wrapped text, without the text itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextColumn {
    /// Left edge of every line.
    pub x: f64,
    /// Maximum line width. `f64::INFINITY` keeps the text on a single line.
    pub width: f64,
    pub style: TextStyle,
    /// Distance between consecutive baselines.
    pub line_height: f64,
}

impl TextColumn {
    /// A column that wraps at `width`.
    pub fn new(x: f64, width: f64, style: TextStyle, line_height: f64) -> Self {
        Self {
            x,
            width,
            style,
            line_height,
        }
    }

    /// A column that never wraps; each text advances the cursor by `advance` once.
    pub fn single_line(x: f64, style: TextStyle, advance: f64) -> Self {
        Self::new(x, f64::INFINITY, style, advance)
    }

    /// Pairs the column with `text`.
    pub fn paragraph(&self, text: impl Into<String>) -> Paragraph {
        Paragraph {
            text: text.into(),
            column: *self,
        }
    }
}

/// Text wrapped into a [`TextColumn`].
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub column: TextColumn,
}

/// Something drawn at a fixed position.
///
/// Inside a [`Block::Fixed`] the `y` coordinates are absolute. Inside a [`Group`] they are
/// offsets from the cursor.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Rect(Rect),
    Text(Text),
    /// A wrapped paragraph whose first baseline sits on `y`.
    Paragraph { paragraph: Paragraph, y: f64 },
}

impl Element {
    /// Convenience constructor for a paragraph element.
    pub fn paragraph(paragraph: Paragraph, y: f64) -> Self {
        Self::Paragraph { paragraph, y }
    }
}

impl From<Rect> for Element {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Elements positioned relative to the cursor, followed by a fixed cursor advance.
///
/// Groups describe panels, call-out boxes, table rows and checklist rows: shapes whose size does
/// not depend on the text they contain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    elements: Vec<Element>,
    advance: f64,
}

impl Group {
    /// Creates an empty group that lowers the cursor by `advance` once drawn.
    pub fn new(advance: f64) -> Self {
        Self {
            elements: Vec::new(),
            advance,
        }
    }

    /// Returns the elements in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns how far the cursor drops after the group.
    pub fn advance(&self) -> f64 {
        self.advance
    }

    /// Appends an element and returns the updated group.
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Extends the group with several elements.
    pub fn with_all<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.elements.extend(elements);
        self
    }
}

/// What precedes each list item.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerKind {
    /// The same glyph on every item, e.g. a bullet.
    Glyph(String),
    /// A running number starting at `start`, followed by `suffix`.
    Number { start: usize, suffix: String },
}

/// A glyph or number drawn beside each list item.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub x: f64,
    /// Vertical offset from the item's first baseline.
    pub dy: f64,
    pub style: TextStyle,
}

impl Marker {
    /// A glyph marker on the item's baseline.
    pub fn glyph(glyph: impl Into<String>, x: f64, style: TextStyle) -> Self {
        Self {
            kind: MarkerKind::Glyph(glyph.into()),
            x,
            dy: 0.0,
            style,
        }
    }

    /// A numeric marker `1.`, `2.`, ... on the item's baseline.
    pub fn numbered(x: f64, style: TextStyle) -> Self {
        Self {
            kind: MarkerKind::Number {
                start: 1,
                suffix: ".".to_owned(),
            },
            x,
            dy: 0.0,
            style,
        }
    }

    /// Sets the first number and its suffix.
    pub fn counting_from(mut self, start: usize, suffix: impl Into<String>) -> Self {
        self.kind = MarkerKind::Number {
            start,
            suffix: suffix.into(),
        };
        self
    }

    /// Raises the marker by `dy` above the baseline.
    pub fn raised(mut self, dy: f64) -> Self {
        self.dy = dy;
        self
    }

    /// The marker text for the item at `index`.
    pub fn label(&self, index: usize) -> String {
        match &self.kind {
            MarkerKind::Glyph(glyph) => glyph.clone(),
            MarkerKind::Number { start, suffix } => format!("{}{}", start + index, suffix),
        }
    }
}

/// Placement of an item title set on the item's first baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTitle {
    pub x: f64,
    pub style: TextStyle,
    /// How far the cursor drops between the title and the body.
    pub advance: f64,
}

/// One entry of a [`List`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListItem {
    pub title: Option<String>,
    pub body: String,
}

impl ListItem {
    /// An item that only has body text.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    /// An item with a title line above the body.
    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
        }
    }
}

/// A vertical run of items sharing their layout.
///
/// Each item draws its marker and title on the current baseline, drops by the title advance,
/// wraps its body into [`List::body`] and finally drops by [`List::spacing`].
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    marker: Option<Marker>,
    title: Option<ItemTitle>,
    body: TextColumn,
    spacing: f64,
    items: Vec<ListItem>,
}

impl List {
    /// Creates an empty list whose bodies are laid out in `body`.
    pub fn new(body: TextColumn) -> Self {
        Self {
            marker: None,
            title: None,
            body,
            spacing: 0.0,
            items: Vec::new(),
        }
    }

    /// Returns the marker, if any.
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Returns the title placement, if any.
    pub fn title(&self) -> Option<&ItemTitle> {
        self.title.as_ref()
    }

    /// Returns the body column.
    pub fn body(&self) -> &TextColumn {
        &self.body
    }

    /// Returns the gap after each item.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the items.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Sets the marker and returns the updated list.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Sets the title placement and returns the updated list.
    pub fn with_title(mut self, x: f64, style: TextStyle, advance: f64) -> Self {
        self.title = Some(ItemTitle { x, style, advance });
        self
    }

    /// Sets the gap after each item and returns the updated list.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Appends an item and returns the updated list.
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    /// Appends untitled items built from `bodies`.
    pub fn with_items<I, S>(mut self, bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(bodies.into_iter().map(ListItem::new));
        self
    }

    /// Appends titled items built from `(title, body)` pairs.
    pub fn with_titled_items<I, T, B>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (T, B)>,
        T: Into<String>,
        B: Into<String>,
    {
        self.items.extend(
            items
                .into_iter()
                .map(|(title, body)| ListItem::titled(title, body)),
        );
        self
    }
}

/// One step of a page's top-to-bottom flow.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Places the cursor at an absolute baseline.
    MoveTo(f64),
    /// Lowers the cursor.
    Gap(f64),
    /// Draws at absolute page coordinates without touching the cursor.
    Fixed(Element),
    /// Wraps a paragraph starting on the cursor and leaves the cursor below its last line.
    Flow(Paragraph),
    /// Draws a list starting on the cursor.
    List(List),
    /// Draws a group relative to the cursor, then lowers the cursor by its advance.
    Group(Group),
}

impl Block {
    /// Convenience helper for a fixed element.
    pub fn fixed(element: impl Into<Element>) -> Self {
        Self::Fixed(element.into())
    }

    /// Convenience helper for a flowing paragraph.
    pub fn flow(column: TextColumn, text: impl Into<String>) -> Self {
        Self::Flow(column.paragraph(text))
    }

    /// A single text run on the cursor, followed by a cursor drop of `advance`.
    pub fn line(text: impl Into<String>, x: f64, style: TextStyle, advance: f64) -> Self {
        Self::Group(Group::new(advance).with(Text::new(text, x, 0.0, style)))
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Group> for Block {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// A single page of a document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    background: Option<Color>,
    bookmark: Option<String>,
    blocks: Vec<Block>,
}

impl Page {
    /// Creates an empty page without background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the colour that fills the whole page, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Returns the outline title that points at this page, if any.
    pub fn bookmark(&self) -> Option<&str> {
        self.bookmark.as_deref()
    }

    /// Returns the blocks in drawing order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Sets the background colour and returns the updated page.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the outline title and returns the updated page.
    pub fn with_bookmark(mut self, title: impl Into<String>) -> Self {
        self.bookmark = Some(title.into());
        self
    }

    /// Appends a block and returns the updated page.
    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Extends the page with multiple blocks and returns the updated page.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }

    /// Appends a block in place.
    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }
}

/// An outline entry pointing at a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    /// 1-based page number.
    pub page: usize,
}

/// A complete document ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    title: String,
    size: PageSize,
    pages: Vec<Page>,
}

impl Document {
    /// Creates an empty A4 document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: PageSize::A4,
            pages: Vec::new(),
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the page size shared by every page.
    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Returns the pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Sets the page size and returns the updated document.
    pub fn with_size(mut self, size: PageSize) -> Self {
        self.size = size;
        self
    }

    /// Appends a page and returns the updated document.
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Extends the document with multiple pages.
    pub fn with_pages<I>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = Page>,
    {
        self.pages.extend(pages);
        self
    }

    /// Outline entries in page order.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(index, page)| {
                page.bookmark().map(|title| Bookmark {
                    title: title.to_owned(),
                    page: index + 1,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: TextStyle = TextStyle::new(Face::Body, 12.0, Color::Greyscale(0));

    #[test]
    fn face_roles_split_into_families() {
        assert!(Face::Display.is_display() && Face::Display.is_bold());
        assert!(Face::DisplayItalic.is_italic() && !Face::DisplayItalic.is_bold());
        assert!(!Face::Body.is_display() && !Face::Body.is_bold());
        assert!(Face::BodyBold.is_bold() && !Face::BodyBold.is_italic());
    }

    #[test]
    fn numbered_markers_count_from_start() {
        let marker = Marker::numbered(60.0, STYLE);
        assert_eq!(marker.label(0), "1.");
        assert_eq!(marker.label(9), "10.");

        let marker = marker.counting_from(4, "");
        assert_eq!(marker.label(0), "4");
        assert_eq!(marker.label(1), "5");
    }

    #[test]
    fn glyph_markers_repeat() {
        let marker = Marker::glyph("\u{2022}", 60.0, STYLE).raised(5.0);
        assert_eq!(marker.label(0), "\u{2022}");
        assert_eq!(marker.label(3), "\u{2022}");
        assert_eq!(marker.dy, 5.0);
    }

    #[test]
    fn single_line_column_never_wraps() {
        let column = TextColumn::single_line(90.0, STYLE, 22.0);
        assert!(column.width.is_infinite());
        assert_eq!(column.paragraph("text").column.line_height, 22.0);
    }

    #[test]
    fn list_builders_collect_items() {
        let list = List::new(TextColumn::new(60.0, 400.0, STYLE, 18.0))
            .with_items(["one", "two"])
            .with_titled_items([("Title", "body")])
            .with_spacing(8.0);

        assert_eq!(list.items().len(), 3);
        assert_eq!(list.items()[2].title.as_deref(), Some("Title"));
        assert_eq!(list.spacing(), 8.0);
    }

    #[test]
    fn bookmarks_use_one_based_page_numbers() {
        let document = Document::new("Doc")
            .with_page(Page::new())
            .with_page(Page::new().with_bookmark("Intro"))
            .with_page(Page::new())
            .with_page(Page::new().with_bookmark("Chapter"));

        let bookmarks = document.bookmarks();
        let pages: Vec<(&str, usize)> = bookmarks
            .iter()
            .map(|bookmark| (bookmark.title.as_str(), bookmark.page))
            .collect();
        assert_eq!(pages, vec![("Intro", 2), ("Chapter", 4)]);
    }

    #[test]
    fn line_block_draws_on_the_cursor() {
        let Block::Group(group) = Block::line("Heading", 60.0, STYLE, 30.0) else {
            panic!("line blocks are groups");
        };
        assert_eq!(group.advance(), 30.0);
        assert_eq!(
            group.elements(),
            &[Element::Text(Text::new("Heading", 60.0, 0.0, STYLE))]
        );
    }
}
