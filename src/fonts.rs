//! Font Table - One Logo Set Per Entry

use serde::{Deserialize, Serialize};

pub type FontId = String;

/// A named font configuration. `id` doubles as the output subdirectory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub id: FontId,
    pub family: String,
    pub weight: String,
}

impl FontSpec {
    pub fn new(id: impl Into<String>, family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            family: family.into(),
            weight: weight.into(),
        }
    }
}

/// The built-in font table, in generation order
pub fn default_fonts() -> Vec<FontSpec> {
    vec![
        FontSpec::new("RobotoMono", "Roboto Mono, monospace", "bold"),
        FontSpec::new("Inter", "Inter, sans-serif", "700"),
        FontSpec::new("SpaceGrotesk", "Space Grotesk, sans-serif", "700"),
        FontSpec::new("Sora", "Sora, sans-serif", "600"),
    ]
}
