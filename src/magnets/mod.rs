//! The LUME lead magnets and the entry points that write them to disk.

pub mod brand;
pub mod checklist;
pub mod playbook;

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::builder::{PdfBuildError, PdfBuilder, RenderedPdf};
use crate::config::GeneratorConfig;
use crate::fonts::FontSet;
use crate::model::{Document, Face};

/// One of the generated documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magnet {
    /// The 28-page networking playbook.
    Playbook,
    /// The one-page networking checklist.
    Checklist,
}

impl Magnet {
    /// Every magnet, in generation order.
    pub const ALL: [Magnet; 2] = [Magnet::Playbook, Magnet::Checklist];

    /// File name written into the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Playbook => playbook::FILE_NAME,
            Self::Checklist => checklist::FILE_NAME,
        }
    }

    /// Builds the page description.
    pub fn document(self) -> Document {
        match self {
            Self::Playbook => playbook::document(),
            Self::Checklist => checklist::document(),
        }
    }

    /// Renders the magnet in memory.
    ///
    /// With the `bookmarks` feature the playbook chapters are added to the PDF outline.
    pub fn render(self, fonts: Arc<FontSet>) -> Result<RenderedPdf, PdfBuildError> {
        let builder = PdfBuilder::new(self.document()).with_fonts(fonts);

        #[cfg(feature = "bookmarks")]
        let rendered = builder.render_with_bookmarks();
        #[cfg(not(feature = "bookmarks"))]
        let rendered = builder.render();

        rendered
    }
}

impl fmt::Display for Magnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playbook => f.write_str("playbook"),
            Self::Checklist => f.write_str("checklist"),
        }
    }
}

/// Renders `magnet` and writes it into the configured output directory.
///
/// Returns the path of the written file. The directory is created when missing and an
/// existing file is overwritten.
pub fn generate(
    magnet: Magnet,
    config: &GeneratorConfig,
    fonts: Arc<FontSet>,
) -> Result<PathBuf, PdfBuildError> {
    let out_dir = config.out_dir();
    fs::create_dir_all(out_dir)?;

    let pdf = magnet.render(fonts)?;
    let path = out_dir.join(magnet.file_name());
    fs::write(&path, &pdf.bytes)?;

    info!(
        "PDF created: {} ({} pages, {} bytes)",
        path.display(),
        pdf.page_count,
        pdf.bytes.len()
    );
    Ok(path)
}

/// Generates each of `magnets` with fonts loaded once from `config`.
///
/// Stops at the first failure.
pub fn run(magnets: &[Magnet], config: &GeneratorConfig) -> Result<Vec<PathBuf>, PdfBuildError> {
    let fonts = Arc::new(config.load_fonts()?);
    info!(
        "Using fonts {} / {}",
        fonts.describe(Face::Display),
        fonts.describe(Face::Body)
    );

    magnets
        .iter()
        .map(|magnet| generate(*magnet, config, Arc::clone(&fonts)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_match_the_published_downloads() {
        assert_eq!(Magnet::Playbook.file_name(), "hni-networking-playbook.pdf");
        assert_eq!(Magnet::Checklist.file_name(), "networking-checklist.pdf");
    }

    #[test]
    fn documents_carry_their_titles() {
        assert_eq!(
            Magnet::Playbook.document().title(),
            "The HNI Networking Playbook"
        );
        assert_eq!(Magnet::Checklist.document().pages().len(), 1);
    }

    #[test]
    fn display_names_match_the_cli() {
        let names: Vec<String> = Magnet::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["playbook", "checklist"]);
    }
}
