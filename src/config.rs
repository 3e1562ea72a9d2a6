//! Generator Configuration - Compile-Time Inputs
//!
//! Everything that shapes the output lives here. The binary only ever uses
//! `GeneratorConfig::default()`; nothing is read from disk or the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fonts::{default_fonts, FontSpec};
use crate::palette::Palette;

pub const DEFAULT_OUTPUT_DIR: &str = "awesome-video-logos";
pub const DEFAULT_README_TITLE: &str = "Awesome Video Logo Assets";
pub const README_FILENAME: &str = "README.md";

/// The two brand words, drawn side by side in the two accent colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub primary: String,
    pub secondary: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            primary: "AWESOME".to_string(),
            secondary: "VIDEO".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub brand: Brand,
    pub palette: Palette,
    pub fonts: Vec<FontSpec>,
    pub output_dir: PathBuf,
    pub readme_title: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            palette: Palette::default(),
            fonts: default_fonts(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            readme_title: DEFAULT_README_TITLE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_fonts(mut self, fonts: Vec<FontSpec>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_brand(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.brand = Brand {
            primary: primary.into(),
            secondary: secondary.into(),
        };
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
