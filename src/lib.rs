//! Generates the LUME lead-magnet PDFs: a 28-page networking playbook and a one-page
//! networking checklist.
//!
//! Pages are described declaratively in [`model`], laid out with the greedy word wrap from
//! [`layout`] by [`render`], and painted to PDF by [`builder`].

pub mod builder;
pub mod config;
pub mod fonts;
pub mod layout;
pub mod magnets;
pub mod model;
pub mod render;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use builder::{PdfBuildError, PdfBuilder, RenderedPdf};
pub use config::GeneratorConfig;
pub use layout::{layout_paragraph, wrap, GlyphMetrics};
pub use magnets::{generate, run, Magnet};
