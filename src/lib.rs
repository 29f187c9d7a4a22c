pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{storage::LocalStorage, toml_config::JobsConfig, ReportFormat, SourcePaths};
pub use crate::core::{consolidate, etl::ConsolidationEngine, pipeline::VocabularyPipeline};
pub use crate::domain::model::{ConsolidationReport, WordSet};
pub use crate::utils::error::{ConsolidationError, Result};
