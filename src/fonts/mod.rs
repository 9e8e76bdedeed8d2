//! Font selection and text measurement for the lead magnets.
//!
//! By default the documents use the PDF standard-14 fonts and measure text with the built-in AFM
//! tables in [`standard`]. A directory of TrueType families can replace them; the files are then
//! loaded through `genpdf`'s font cache for measuring and embedded into the output by `printpdf`.

pub mod standard;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{Font, FontCache, FontData, FontFamily};
use log::{debug, warn};
use printpdf::{IndirectFontRef, PdfDocumentReference};

use crate::layout::GlyphMetrics;
use crate::model::Face;

pub use standard::StandardFont;

/// Environment variable naming a directory with TrueType font families.
pub const FONTS_DIR_ENV: &str = "LEAD_MAGNETS_FONTS_DIR";

/// Family used for body text when loading fonts from a directory.
pub const DEFAULT_BODY_FAMILY: &str = "LiberationSans";

/// Family used for display text when loading fonts from a directory.
pub const DEFAULT_DISPLAY_FAMILY: &str = "LiberationSerif";

const VARIANTS: [&str; 4] = ["Regular", "Bold", "Italic", "BoldItalic"];

fn family_files(directory: &Path, family: &str) -> Vec<PathBuf> {
    VARIANTS
        .iter()
        .map(|variant| directory.join(format!("{}-{}.ttf", family, variant)))
        .collect()
}

fn missing_font_files(directory: &Path, family: &str) -> Vec<PathBuf> {
    family_files(directory, family)
        .into_iter()
        .filter(|candidate| !candidate.is_file())
        .collect()
}

/// Indicates whether all four variants of `family` exist in `directory`.
pub fn family_available(directory: &Path, family: &str) -> bool {
    directory.is_dir() && missing_font_files(directory, family).is_empty()
}

fn ensure_family_present(directory: &Path, family: &str) -> Result<(), Error> {
    if !directory.is_dir() {
        return Err(Error::new(
            format!("Font directory missing at {}", directory.display()),
            io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
        ));
    }

    let missing = missing_font_files(directory, family);
    if missing.is_empty() {
        return Ok(());
    }

    let missing_list = missing
        .iter()
        .map(|path| {
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join(", ");

    Err(Error::new(
        format!(
            "Font family '{}' incomplete in {}: missing [{}]",
            family,
            directory.display(),
            missing_list
        ),
        io::Error::new(io::ErrorKind::NotFound, "font files missing"),
    ))
}

fn load_face(path: &Path, style: &str) -> Result<(Vec<u8>, FontData), Error> {
    let bytes = fs::read(path).map_err(|err| {
        Error::new(
            format!("Failed to read {} font at {}", style, path.display()),
            err,
        )
    })?;

    let data = FontData::new(bytes.clone(), None).map_err(|err| {
        Error::new(
            format!(
                "Failed to parse {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })?;

    Ok((bytes, data))
}

/// A TrueType family loaded from disk.
struct LoadedFamily {
    name: String,
    cache: FontCache,
    fonts: FontFamily<Font>,
    bytes: FontFamily<Vec<u8>>,
}

impl LoadedFamily {
    fn load(directory: &Path, name: &str) -> Result<Self, Error> {
        ensure_family_present(directory, name)?;

        let paths = family_files(directory, name);
        let (regular_bytes, regular) = load_face(&paths[0], "regular")?;
        let (bold_bytes, bold) = load_face(&paths[1], "bold")?;
        let (italic_bytes, italic) = load_face(&paths[2], "italic")?;
        let (bold_italic_bytes, bold_italic) = load_face(&paths[3], "bold italic")?;

        let cache = FontCache::new(FontFamily {
            regular,
            bold,
            italic,
            bold_italic,
        });
        let fonts = cache.default_font_family();
        debug!("Loaded font family '{}' from {}", name, directory.display());

        Ok(Self {
            name: name.to_owned(),
            cache,
            fonts,
            bytes: FontFamily {
                regular: regular_bytes,
                bold: bold_bytes,
                italic: italic_bytes,
                bold_italic: bold_italic_bytes,
            },
        })
    }

    fn font(&self, bold: bool, italic: bool) -> (Font, &[u8]) {
        match (bold, italic) {
            (false, false) => (self.fonts.regular, &self.bytes.regular),
            (true, false) => (self.fonts.bold, &self.bytes.bold),
            (false, true) => (self.fonts.italic, &self.bytes.italic),
            (true, true) => (self.fonts.bold_italic, &self.bytes.bold_italic),
        }
    }
}

enum FontSource {
    Standard,
    External {
        body: Box<LoadedFamily>,
        display: Box<LoadedFamily>,
    },
}

/// The fonts backing the four typographic [`Face`] roles.
pub struct FontSet {
    source: FontSource,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FontSet {
    /// Standard-14 fonts: Times-Bold and Times-Italic for display, Helvetica for body text.
    pub fn standard() -> Self {
        Self {
            source: FontSource::Standard,
        }
    }

    /// Loads the body and display families from `directory`.
    ///
    /// Each family needs `<Family>-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf` and
    /// `-BoldItalic.ttf`.
    pub fn from_directory(
        directory: &Path,
        body_family: &str,
        display_family: &str,
    ) -> Result<Self, Error> {
        let body = LoadedFamily::load(directory, body_family)?;
        let display = LoadedFamily::load(directory, display_family)?;

        Ok(Self {
            source: FontSource::External {
                body: Box::new(body),
                display: Box::new(display),
            },
        })
    }

    /// Picks the fonts for a run.
    ///
    /// An explicit directory must hold both families. Otherwise the directory named by
    /// [`FONTS_DIR_ENV`] is tried, falling back to the standard fonts with a warning when its
    /// files are missing.
    pub fn resolve(
        explicit_directory: Option<&Path>,
        body_family: &str,
        display_family: &str,
    ) -> Result<Self, Error> {
        if let Some(directory) = explicit_directory {
            return Self::from_directory(directory, body_family, display_family);
        }

        let Some(directory) = env_path(FONTS_DIR_ENV) else {
            return Ok(Self::standard());
        };

        match Self::from_directory(&directory, body_family, display_family) {
            Ok(fonts) => Ok(fonts),
            Err(err) if fonts_missing(&err) => {
                warn!(
                    "Fonts from {} unavailable ({}); falling back to the standard PDF fonts.",
                    FONTS_DIR_ENV, err
                );
                Ok(Self::standard())
            }
            Err(err) => Err(err),
        }
    }

    /// Returns `true` when the standard-14 fonts are in use.
    pub fn is_standard(&self) -> bool {
        matches!(self.source, FontSource::Standard)
    }

    /// Human readable name of the font behind `face`.
    pub fn describe(&self, face: Face) -> String {
        match &self.source {
            FontSource::Standard => standard_font(face).name().to_owned(),
            FontSource::External { body, display } => {
                let family = if face.is_display() { display } else { body };
                let variant = match (face.is_bold(), face.is_italic()) {
                    (false, false) => "Regular",
                    (true, false) => "Bold",
                    (false, true) => "Italic",
                    (true, true) => "BoldItalic",
                };
                format!("{}-{}", family.name, variant)
            }
        }
    }

    /// Width measurement for `face`.
    pub fn metrics(&self, face: Face) -> FaceMetrics<'_> {
        match &self.source {
            FontSource::Standard => FaceMetrics::Standard(standard_font(face)),
            FontSource::External { body, display } => {
                let family = if face.is_display() { display } else { body };
                let (font, _) = family.font(face.is_bold(), face.is_italic());
                FaceMetrics::TrueType {
                    cache: &family.cache,
                    font,
                }
            }
        }
    }

    /// Registers the font behind `face` with `document`.
    pub(crate) fn embed(
        &self,
        document: &PdfDocumentReference,
        face: Face,
    ) -> Result<IndirectFontRef, printpdf::Error> {
        match &self.source {
            FontSource::Standard => document.add_builtin_font(standard_font(face).builtin()),
            FontSource::External { body, display } => {
                let family = if face.is_display() { display } else { body };
                let (_, bytes) = family.font(face.is_bold(), face.is_italic());
                document.add_external_font(bytes)
            }
        }
    }
}

/// The standard-14 font playing `face`.
pub fn standard_font(face: Face) -> StandardFont {
    match face {
        Face::Display => StandardFont::TimesBold,
        Face::DisplayItalic => StandardFont::TimesItalic,
        Face::Body => StandardFont::Helvetica,
        Face::BodyBold => StandardFont::HelveticaBold,
    }
}

/// Measures text set in one face of a [`FontSet`].
pub enum FaceMetrics<'a> {
    /// AFM widths of a standard-14 font.
    Standard(StandardFont),
    /// Glyph advances from a loaded TrueType font.
    TrueType {
        /// Cache holding the font data.
        cache: &'a FontCache,
        /// The measured font.
        font: Font,
    },
}

impl GlyphMetrics for FaceMetrics<'_> {
    fn width_of_text_at_size(&self, text: &str, size: f64) -> f64 {
        match self {
            Self::Standard(font) => font.text_width(text, size),
            Self::TrueType { cache, font } => {
                // genpdf only measures integral point sizes, so measure large and scale down.
                let width: printpdf::Mm = font.str_width(cache, text, 250).into();
                printpdf::Pt::from(width).0 * size / 250.0
            }
        }
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_maps_roles_to_builtin_faces() {
        let fonts = FontSet::standard();
        assert!(fonts.is_standard());
        assert_eq!(fonts.describe(Face::Display), "Times-Bold");
        assert_eq!(fonts.describe(Face::DisplayItalic), "Times-Italic");
        assert_eq!(fonts.describe(Face::Body), "Helvetica");
        assert_eq!(fonts.describe(Face::BodyBold), "Helvetica-Bold");
    }

    #[test]
    fn standard_metrics_use_afm_widths() {
        let fonts = FontSet::standard();
        let width = fonts
            .metrics(Face::Body)
            .width_of_text_at_size("Hello", 10.0);
        assert!((width - 22.78).abs() < 1e-9);
    }

    #[test]
    fn missing_directory_is_a_not_found_error() {
        let err = FontSet::from_directory(
            Path::new("/__lead_magnets_missing_fonts__"),
            DEFAULT_BODY_FAMILY,
            DEFAULT_DISPLAY_FAMILY,
        )
        .err()
        .expect("directory does not exist");
        assert!(fonts_missing(&err));
    }

    #[test]
    fn incomplete_family_lists_missing_files() {
        let directory = env::temp_dir().join(format!(
            "lead_magnets_fonts_{}_incomplete",
            std::process::id()
        ));
        fs::create_dir_all(&directory).expect("create temp dir");

        assert!(!family_available(&directory, "Nope"));
        let err = FontSet::from_directory(&directory, "Nope", "Nope")
            .err()
            .expect("family files are absent");
        assert!(fonts_missing(&err));
        assert!(err.to_string().contains("Nope-BoldItalic.ttf"));

        fs::remove_dir_all(&directory).ok();
    }
}
