//! Run configuration shared by the library entry points and the CLI.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::fonts::{self, FontSet};

/// Environment variable overriding the output directory.
pub const OUT_DIR_ENV: &str = "LEAD_MAGNETS_OUT_DIR";

/// Where the generated PDFs go and which fonts they use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    out_dir: PathBuf,
    fonts_dir: Option<PathBuf>,
    body_family: String,
    display_family: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            fonts_dir: None,
            body_family: fonts::DEFAULT_BODY_FAMILY.to_owned(),
            display_family: fonts::DEFAULT_DISPLAY_FAMILY.to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults, with the output directory taken from [`OUT_DIR_ENV`] when set.
    ///
    /// The fonts directory variable is consulted later by [`FontSet::resolve`] so that an
    /// incomplete directory there only triggers a fallback.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var_os(name))
    }

    /// Like [`GeneratorConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(OUT_DIR_ENV).filter(|value| !value.is_empty()) {
            config.out_dir = PathBuf::from(value);
        }
        config
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the explicitly configured fonts directory, if any.
    pub fn fonts_dir(&self) -> Option<&Path> {
        self.fonts_dir.as_deref()
    }

    /// Returns the TrueType family used for body text.
    pub fn body_family(&self) -> &str {
        &self.body_family
    }

    /// Returns the TrueType family used for display text.
    pub fn display_family(&self) -> &str {
        &self.display_family
    }

    /// Sets the output directory and returns the updated config.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Requires fonts to be loaded from `fonts_dir` and returns the updated config.
    pub fn with_fonts_dir(mut self, fonts_dir: impl Into<Option<PathBuf>>) -> Self {
        self.fonts_dir = fonts_dir.into();
        self
    }

    /// Sets the TrueType family names and returns the updated config.
    pub fn with_families(
        mut self,
        body_family: impl Into<String>,
        display_family: impl Into<String>,
    ) -> Self {
        self.body_family = body_family.into();
        self.display_family = display_family.into();
        self
    }

    /// Loads the fonts this configuration asks for.
    pub fn load_fonts(&self) -> Result<FontSet, genpdf::error::Error> {
        FontSet::resolve(
            self.fonts_dir(),
            &self.body_family,
            &self.display_family,
        )
    }
}
