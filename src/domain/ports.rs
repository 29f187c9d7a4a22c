use crate::domain::model::WordSet;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Reads the whole file. A missing file is reported as `MissingSource`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Replaces the file at `path` with `data`; no partial file is left on failure.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn primary_path(&self) -> &Path;
    fn additional_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

pub trait Pipeline {
    fn config(&self) -> &dyn ConfigProvider;
    /// Returns the loaded words and whether the primary source was absent.
    fn load_primary(&self) -> Result<(WordSet, bool)>;
    /// Returns the number of distinct new words merged in.
    fn merge_additional(&self, words: &mut WordSet) -> Result<usize>;
    /// Returns the path written.
    fn persist(&self, words: &WordSet) -> Result<PathBuf>;
}
