//! PDF output for composed documents.

use std::io::{self, BufWriter, Cursor};
use std::sync::Arc;

use log::debug;
use printpdf::{
    Cmyk, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Pt, Rgb,
};

use crate::fonts::FontSet;
use crate::model::{Bookmark, Color, Document, Face, Rect, Text};
use crate::render::{compose_page, DrawOp};

#[cfg(feature = "bookmarks")]
use crate::bookmarks::{self, BookmarkError};

const LAYER_NAME: &str = "Layer 1";

/// Errors raised while producing a PDF.
#[derive(Debug)]
pub enum PdfBuildError {
    /// Fonts could not be located or parsed.
    FontLoad(genpdf::error::Error),
    /// `printpdf` rejected a font or failed to serialise the document.
    Pdf(printpdf::Error),
    /// Writing the output failed.
    Io(io::Error),
    /// The document has no pages.
    EmptyDocument,
    /// The outline could not be embedded.
    #[cfg(feature = "bookmarks")]
    Bookmarks(BookmarkError),
}

impl From<genpdf::error::Error> for PdfBuildError {
    fn from(err: genpdf::error::Error) -> Self {
        Self::FontLoad(err)
    }
}

impl From<printpdf::Error> for PdfBuildError {
    fn from(err: printpdf::Error) -> Self {
        Self::Pdf(err)
    }
}

impl From<io::Error> for PdfBuildError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "bookmarks")]
impl From<BookmarkError> for PdfBuildError {
    fn from(err: BookmarkError) -> Self {
        Self::Bookmarks(err)
    }
}

impl std::fmt::Display for PdfBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to load fonts: {err}"),
            Self::Pdf(err) => write!(f, "Failed to build PDF: {err}"),
            Self::Io(err) => write!(f, "Failed to write PDF: {err}"),
            Self::EmptyDocument => write!(f, "Document has no pages"),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => write!(f, "Failed to add bookmarks: {err}"),
        }
    }
}

impl std::error::Error for PdfBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) => Some(err),
            Self::Pdf(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::EmptyDocument => None,
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => Some(err),
        }
    }
}

/// Output of a successful render.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// Serialised PDF.
    pub bytes: Vec<u8>,
    /// Number of pages written.
    pub page_count: usize,
    /// Outline entries embedded in `bytes`; empty unless rendered with bookmarks.
    pub bookmarks: Vec<Bookmark>,
}

/// Renders a [`Document`] with a [`FontSet`].
///
/// The fonts are shared so one loaded set can serve several documents.
pub struct PdfBuilder {
    document: Document,
    fonts: Arc<FontSet>,
}

impl PdfBuilder {
    /// Creates a builder using the standard fonts.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            fonts: Arc::new(FontSet::standard()),
        }
    }

    /// Replaces the fonts used for measuring and embedding.
    pub fn with_fonts(mut self, fonts: impl Into<Arc<FontSet>>) -> Self {
        self.fonts = fonts.into();
        self
    }

    /// Returns the display list of every page without producing a PDF.
    pub fn compose(&self) -> Vec<Vec<DrawOp>> {
        let size = self.document.size();
        self.document
            .pages()
            .iter()
            .map(|page| compose_page(page, &self.fonts, size))
            .collect()
    }

    /// Renders the document into PDF bytes.
    pub fn render(&self) -> Result<RenderedPdf, PdfBuildError> {
        let pages = self.compose();
        if pages.is_empty() {
            return Err(PdfBuildError::EmptyDocument);
        }

        let size = self.document.size();
        let (width, height) = (Mm::from(Pt(size.width)), Mm::from(Pt(size.height)));
        let (pdf, first_page, first_layer) =
            PdfDocument::new(self.document.title(), width, height, LAYER_NAME);
        let fonts = EmbeddedFonts::register(&pdf, &self.fonts)?;

        for (index, ops) in pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                pdf.add_page(width, height, LAYER_NAME)
            };
            let layer = pdf.get_page(page).get_layer(layer);
            debug!(
                "Painting page {} of '{}' ({} operations)",
                index + 1,
                self.document.title(),
                ops.len()
            );

            for op in ops {
                match op {
                    DrawOp::Rect(rect) => paint_rect(&layer, rect),
                    DrawOp::Text(text) => paint_text(&layer, &fonts, text),
                }
            }
        }

        let mut writer = BufWriter::new(Cursor::new(Vec::new()));
        pdf.save(&mut writer)?;
        let bytes = writer
            .into_inner()
            .map_err(|err| err.into_error())?
            .into_inner();

        Ok(RenderedPdf {
            bytes,
            page_count: pages.len(),
            bookmarks: Vec::new(),
        })
    }

    /// Renders the document and embeds an outline built from the page bookmarks.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(&self) -> Result<RenderedPdf, PdfBuildError> {
        let mut rendered = self.render()?;
        let outline = self.document.bookmarks();
        rendered.bytes = bookmarks::apply_page_bookmarks(&rendered.bytes, &outline)?;
        rendered.bookmarks = outline;
        Ok(rendered)
    }
}

/// Font references registered with a `printpdf` document, one per face.
struct EmbeddedFonts {
    display: IndirectFontRef,
    display_italic: IndirectFontRef,
    body: IndirectFontRef,
    body_bold: IndirectFontRef,
}

impl EmbeddedFonts {
    fn register(pdf: &PdfDocumentReference, fonts: &FontSet) -> Result<Self, printpdf::Error> {
        Ok(Self {
            display: fonts.embed(pdf, Face::Display)?,
            display_italic: fonts.embed(pdf, Face::DisplayItalic)?,
            body: fonts.embed(pdf, Face::Body)?,
            body_bold: fonts.embed(pdf, Face::BodyBold)?,
        })
    }

    fn get(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Display => &self.display,
            Face::DisplayItalic => &self.display_italic,
            Face::Body => &self.body,
            Face::BodyBold => &self.body_bold,
        }
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    fn unit(value: u8) -> f64 {
        f64::from(value) / 255.0
    }

    match color {
        Color::Rgb(r, g, b) => printpdf::Color::Rgb(Rgb::new(unit(r), unit(g), unit(b), None)),
        Color::Cmyk(c, m, y, k) => {
            printpdf::Color::Cmyk(Cmyk::new(unit(c), unit(m), unit(y), unit(k), None))
        }
        Color::Greyscale(value) => printpdf::Color::Greyscale(Greyscale::new(unit(value), None)),
    }
}

fn point(x: f64, y: f64) -> Point {
    Point::new(Mm::from(Pt(x)), Mm::from(Pt(y)))
}

fn paint_rect(layer: &PdfLayerReference, rect: &Rect) {
    if rect.fill.is_none() && rect.border.is_none() {
        return;
    }

    let (left, bottom) = (rect.x, rect.y);
    let (right, top) = (rect.x + rect.width, rect.y + rect.height);

    if let Some(fill) = rect.fill {
        layer.set_fill_color(pdf_color(fill));
    }
    if let Some(border) = rect.border {
        layer.set_outline_color(pdf_color(border.color));
        layer.set_outline_thickness(border.width);
    }

    layer.add_shape(Line {
        points: vec![
            (point(left, bottom), false),
            (point(right, bottom), false),
            (point(right, top), false),
            (point(left, top), false),
        ],
        is_closed: true,
        has_fill: rect.fill.is_some(),
        has_stroke: rect.border.is_some(),
        is_clipping_path: false,
    });
}

fn paint_text(layer: &PdfLayerReference, fonts: &EmbeddedFonts, text: &Text) {
    if text.content.is_empty() {
        return;
    }

    layer.set_fill_color(pdf_color(text.style.color));
    layer.use_text(
        text.content.as_str(),
        text.style.size,
        Mm::from(Pt(text.x)),
        Mm::from(Pt(text.y)),
        fonts.get(text.style.face),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Page, TextStyle};

    fn sample_document() -> Document {
        let style = TextStyle::new(Face::Body, 12.0, Color::Rgb(43, 50, 58));
        Document::new("Sample")
            .with_page(
                Page::new()
                    .with_background(Color::Rgb(250, 250, 250))
                    .with_block(Block::fixed(Text::new("Hello, PDF!", 60.0, 700.0, style))),
            )
            .with_page(
                Page::new().with_block(Block::fixed(
                    Rect::filled(40.0, 700.0, 14.0, 14.0, Color::Rgb(255, 255, 255))
                        .with_border(Color::Rgb(255, 81, 73), 1.5),
                )),
            )
    }

    #[test]
    fn renders_every_page() {
        let rendered = PdfBuilder::new(sample_document())
            .render()
            .expect("render sample document");

        assert_eq!(rendered.page_count, 2);
        assert!(rendered.bytes.starts_with(b"%PDF-"));
        assert!(rendered.bookmarks.is_empty());
    }

    #[test]
    fn empty_document_is_rejected() {
        let err = PdfBuilder::new(Document::new("Empty"))
            .render()
            .expect_err("no pages to render");
        assert!(matches!(err, PdfBuildError::EmptyDocument));
    }

    #[test]
    fn colours_scale_to_unit_range() {
        match pdf_color(Color::Rgb(255, 0, 51)) {
            printpdf::Color::Rgb(rgb) => {
                assert_eq!(rgb.r, 1.0);
                assert_eq!(rgb.g, 0.0);
                assert!((rgb.b - 0.2).abs() < 1e-9);
            }
            other => panic!("unexpected colour {:?}", other),
        }
    }

    #[test]
    fn errors_keep_their_source() {
        use std::error::Error as _;

        let err = PdfBuildError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(err.to_string().contains("disk full"));
        assert!(err.source().is_some());
    }
}
