//! Configuration Validation - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy: any Error-severity violation blocks generation; warnings are recorded.
//! Only the configuration is checked. Rendered SVG is never parsed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path};

use crate::config::GeneratorConfig;
use crate::palette::is_hex_color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    /// `rule: message` for every violation, joined with `; `
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| match &v.actual {
                Some(actual) => format!("{}: {} ({})", v.rule, v.message, actual),
                None => format!("{}: {}", v.rule, v.message),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, config: &GeneratorConfig) -> Vec<ValidationViolation>;

    fn error(&self, message: impl Into<String>, actual: Option<String>) -> ValidationViolation
    where
        Self: Sized,
    {
        ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: message.into(),
            actual,
        }
    }
}

// --- Concrete Rules ---

pub struct PaletteRule;

impl ValidationRule for PaletteRule {
    fn name(&self) -> &'static str { "palette" }

    fn validate(&self, config: &GeneratorConfig) -> Vec<ValidationViolation> {
        config
            .palette
            .roles()
            .into_iter()
            .filter(|(_, swatch)| !is_hex_color(&swatch.hex))
            .map(|(role, swatch)| {
                self.error(format!("{} color is not #RRGGBB", role), Some(swatch.hex.clone()))
            })
            .collect()
    }
}

pub struct BrandRule;

impl ValidationRule for BrandRule {
    fn name(&self) -> &'static str { "brand" }

    fn validate(&self, config: &GeneratorConfig) -> Vec<ValidationViolation> {
        let mut violations = vec![];
        if config.brand.primary.trim().is_empty() {
            violations.push(self.error("primary brand word is empty", None));
        }
        if config.brand.secondary.trim().is_empty() {
            violations.push(self.error("secondary brand word is empty", None));
        }
        violations
    }
}

pub struct FontTableRule;

impl ValidationRule for FontTableRule {
    fn name(&self) -> &'static str { "fonts" }

    fn validate(&self, config: &GeneratorConfig) -> Vec<ValidationViolation> {
        let mut violations = vec![];

        if config.fonts.is_empty() {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "no fonts configured, only the README will be written".to_string(),
                actual: None,
            });
        }

        let mut seen = HashSet::new();
        for font in &config.fonts {
            if !is_single_component(&font.id) {
                violations.push(self.error(
                    "font id must be a single directory name",
                    Some(font.id.clone()),
                ));
            }
            // Directory names collide on case-insensitive filesystems
            if !seen.insert(font.id.to_ascii_lowercase()) {
                violations.push(self.error("duplicate font id", Some(font.id.clone())));
            }
            if font.family.trim().is_empty() {
                violations.push(self.error("font family is empty", Some(font.id.clone())));
            }
            if font.weight.trim().is_empty() {
                violations.push(self.error("font weight is empty", Some(font.id.clone())));
            }
        }

        violations
    }
}

fn is_single_component(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == id
    )
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PaletteRule),
                Box::new(BrandRule),
                Box::new(FontTableRule),
            ],
        }
    }

    pub fn validate(&self, config: &GeneratorConfig) -> ValidationResult {
        let violations: Vec<_> = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(config))
            .collect();

        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
