pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{ConsolidationError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The three files one consolidation works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePaths {
    pub primary: PathBuf,
    pub additional: PathBuf,
    pub output: PathBuf,
}

impl SourcePaths {
    pub fn new(
        primary: impl AsRef<Path>,
        additional: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Self {
        Self {
            primary: primary.as_ref().to_path_buf(),
            additional: additional.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }
}

impl ConfigProvider for SourcePaths {
    fn primary_path(&self) -> &Path {
        &self.primary
    }

    fn additional_path(&self) -> &Path {
        &self.additional
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

fn path_str<'a>(field: &str, path: &'a Path) -> Result<&'a str> {
    path.to_str()
        .ok_or_else(|| ConsolidationError::InvalidConfigValueError {
            field: field.to_string(),
            value: path.to_string_lossy().into_owned(),
            reason: "Path is not valid UTF-8".to_string(),
        })
}

impl Validate for SourcePaths {
    fn validate(&self) -> Result<()> {
        let primary = path_str("primary", &self.primary)?;
        let additional = path_str("additional", &self.additional)?;
        let output = path_str("output", &self.output)?;

        validation::validate_path("primary", primary)?;
        validation::validate_path("additional", additional)?;
        validation::validate_path("output", output)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "vocab-consolidator")]
#[command(about = "Merge two word lists into one sorted, deduplicated vocabulary file")]
pub struct CliConfig {
    /// Existing vocabulary file; may be absent
    pub primary: PathBuf,

    /// Word list to merge in; must exist
    pub additional: PathBuf,

    /// Destination file, overwritten on success
    pub output: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory and timing after each stage")]
    pub monitor: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths::new(&self.primary, &self.additional, &self.output)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn primary_path(&self) -> &Path {
        &self.primary
    }

    fn additional_path(&self) -> &Path {
        &self.additional
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.source_paths().validate()
    }
}
