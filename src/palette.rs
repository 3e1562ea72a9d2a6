//! Brand Palette - Fixed Color Roles

use serde::{Deserialize, Serialize};

/// A named color value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    pub hex: String,
}

impl Swatch {
    pub fn new(label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self { label: label.into(), hex: hex.into() }
    }
}

/// Semantic color roles applied uniformly across every layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Swatch,
    /// Accent for the icon's outer strokes and the first brand word
    pub primary: Swatch,
    /// Accent for the icon's inner strokes and the second brand word
    pub secondary: Swatch,
    pub foreground: Swatch,
}

impl Palette {
    /// All roles in declaration order, keyed by role name
    pub fn roles(&self) -> [(&'static str, &Swatch); 4] {
        [
            ("background", &self.background),
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("foreground", &self.foreground),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Swatch::new("Background", "#0B0D10"),
            primary: Swatch::new("Pink", "#FF2DA0"),
            secondary: Swatch::new("Cyan", "#00F0FF"),
            foreground: Swatch::new("White", "#FFFFFF"),
        }
    }
}

/// `#RRGGBB`, either case
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
