pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{ConsolidationReport, WordSet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::config::storage::LocalStorage;
use crate::config::SourcePaths;
use etl::ConsolidationEngine;
use pipeline::VocabularyPipeline;
use std::path::Path;

/// Merges `primary` (optional) and `additional` (required) into `output`.
///
/// Returns `(primary_count, added_count)`: the number of distinct words in the
/// primary source and the number of distinct words the additional source
/// contributed on top of them.
pub fn consolidate(
    primary: impl AsRef<Path>,
    additional: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(usize, usize)> {
    let paths = SourcePaths::new(primary, additional, output);
    let pipeline = VocabularyPipeline::new(LocalStorage::default(), paths);
    let report = ConsolidationEngine::new(pipeline).run()?;
    Ok(report.counts())
}
