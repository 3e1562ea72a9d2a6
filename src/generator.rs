//! Generator - Single Entry Point
//!
//! `run` always validates the configuration first. Nothing touches the
//! filesystem until validation passes.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, README_FILENAME};
use crate::fonts::FontSpec;
use crate::hashing::{compute_config_hash, sha256_hex};
use crate::layout::Layout;
use crate::readme;
use crate::validation::Validator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A rendered file, path relative to the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub config_hash: String,
    pub files: Vec<WrittenFile>,
}

impl GenerationReport {
    pub fn font_count(&self) -> usize {
        self.files.iter().filter(|f| f.path.components().count() > 1).count() / Layout::ALL.len()
    }
}

pub struct Generator {
    config: GeneratorConfig,
    validator: Validator,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            validator: Validator::new(),
        }
    }

    /// Render the four layouts for one font
    pub fn render_font(&self, font: &FontSpec) -> Vec<Artifact> {
        Layout::ALL
            .iter()
            .map(|layout| Artifact {
                path: Path::new(&font.id).join(layout.file_name()),
                content: layout.render(&self.config.brand, font, &self.config.palette),
            })
            .collect()
    }

    /// Every artifact a run would write, in write order, README last
    pub fn plan(&self) -> Vec<Artifact> {
        let mut artifacts: Vec<_> = self
            .config
            .fonts
            .iter()
            .flat_map(|font| self.render_font(font))
            .collect();
        artifacts.push(Artifact {
            path: PathBuf::from(README_FILENAME),
            content: readme::render(&self.config),
        });
        artifacts
    }

    /// Validate, then write every artifact under the output directory
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let validation = self.validator.validate(&self.config);
        if !validation.valid {
            return Err(GeneratorError::InvalidConfig(validation.summary()));
        }
        for violation in &validation.violations {
            warn!(rule = %violation.rule, "{}", violation.message);
        }

        let config_hash = compute_config_hash(&self.config)?;
        let root = &self.config.output_dir;
        create_dir(root)?;

        let mut files = vec![];
        let mut readme_sections = vec![];

        for font in &self.config.fonts {
            info!(font = %font.id, family = %font.family, weight = %font.weight, "Generating logo set");
            create_dir(&root.join(&font.id))?;

            for artifact in self.render_font(font) {
                files.push(write_artifact(root, &artifact)?);
            }

            readme_sections.push(readme::font_section(font, &self.config.palette));
        }

        let readme = Artifact {
            path: PathBuf::from(README_FILENAME),
            content: readme::assemble(&self.config.readme_title, &readme_sections),
        };
        files.push(write_artifact(root, &readme)?);

        let report = GenerationReport {
            output_dir: root.clone(),
            config_hash,
            files,
        };

        info!(
            output_dir = %root.display(),
            files = report.files.len(),
            config_hash = %report.config_hash,
            "Generation complete"
        );

        Ok(report)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

fn create_dir(path: &Path) -> Result<(), GeneratorError> {
    fs::create_dir_all(path).map_err(|source| GeneratorError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_artifact(root: &Path, artifact: &Artifact) -> Result<WrittenFile, GeneratorError> {
    let full = root.join(&artifact.path);
    fs::write(&full, &artifact.content).map_err(|source| GeneratorError::Write {
        path: full.clone(),
        source,
    })?;

    let sha256 = sha256_hex(artifact.content.as_bytes());
    debug!(path = %full.display(), bytes = artifact.content.len(), %sha256, "Wrote file");

    Ok(WrittenFile {
        path: artifact.path.clone(),
        bytes: artifact.content.len(),
        sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Palette, Swatch};

    #[test]
    fn test_plan_covers_every_font() {
        let generator = Generator::default();
        let plan = generator.plan();
        assert_eq!(plan.len(), 4 * 4 + 1);
        assert_eq!(plan[0].path, PathBuf::from("RobotoMono/horizontal.svg"));
        assert_eq!(plan.last().unwrap().path, PathBuf::from("README.md"));
    }

    #[test]
    fn test_render_font_paths() {
        let generator = Generator::default();
        let font = FontSpec::new("Sora", "Sora, sans-serif", "600");
        let paths: Vec<_> = generator.render_font(&font).into_iter().map(|a| a.path).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("Sora/horizontal.svg"),
                PathBuf::from("Sora/stacked.svg"),
                PathBuf::from("Sora/text_only.svg"),
                PathBuf::from("Sora/icon_only.svg"),
            ]
        );
    }

    #[test]
    fn test_run_writes_rendered_readme() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default().with_output_dir(dir.path());
        let expected = readme::render(&config);

        let report = Generator::new(config).run().unwrap();
        let written = fs::read_to_string(dir.path().join(README_FILENAME)).unwrap();
        assert_eq!(written, expected);
        assert_eq!(report.files.last().unwrap().sha256, sha256_hex(expected.as_bytes()));
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let palette = Palette {
            background: Swatch::new("Background", "black"),
            ..Palette::default()
        };
        let generator = Generator::new(
            GeneratorConfig::default().with_output_dir(&out).with_palette(palette),
        );

        let err = generator.run().unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_write_failure_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let generator = Generator::new(GeneratorConfig::default().with_output_dir(&blocker));
        let err = generator.run().unwrap_err();
        match err {
            GeneratorError::CreateDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
