//! LogoForge Core - Brand Logo Asset Generator
//!
//! Renders four SVG layouts (horizontal, stacked, text-only, icon-only) for
//! every configured font and writes a README summarizing fonts and colors.
//!
//! Output is a pure function of `GeneratorConfig`: re-running overwrites
//! every file with byte-identical content.

pub mod palette;
pub mod fonts;
pub mod config;
pub mod svg;
pub mod layout;
pub mod readme;
pub mod validation;
pub mod hashing;
pub mod generator;

pub use palette::{Palette, Swatch};
pub use fonts::{FontSpec, FontId, default_fonts};
pub use config::{Brand, GeneratorConfig};
pub use layout::Layout;
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use hashing::{compute_config_hash, canonical_json, sha256_hex};
pub use generator::{Artifact, GenerationReport, Generator, GeneratorError, WrittenFile};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
