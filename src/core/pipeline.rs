use crate::core::{ConfigProvider, Pipeline, Storage, WordSet};
use crate::utils::error::{ConsolidationError, Result};
use std::path::{Path, PathBuf};

pub struct VocabularyPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VocabularyPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_words(&self, path: &Path, words: &mut WordSet) -> Result<usize> {
        let bytes = self.storage.read_file(path)?;
        let text = decode_utf8(path, &bytes)?;
        Ok(words.extend_from_lines(text))
    }
}

/// Decodes `bytes` as UTF-8, naming the 1-based line of the first bad sequence on failure.
pub fn decode_utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
            .count()
            + 1;
        ConsolidationError::Decode {
            path: path.to_path_buf(),
            line,
        }
    })
}

impl<S: Storage, C: ConfigProvider> Pipeline for VocabularyPipeline<S, C> {
    fn config(&self) -> &dyn ConfigProvider {
        &self.config
    }

    fn load_primary(&self) -> Result<(WordSet, bool)> {
        let path = self.config.primary_path();
        let mut words = WordSet::new();

        match self.read_words(path, &mut words) {
            Ok(_) => {
                tracing::info!("Primary words loaded: {}", words.len());
                Ok((words, false))
            }
            Err(ConsolidationError::MissingSource { path }) => {
                tracing::warn!(
                    "⚠️ {} not found, starting from an empty word set",
                    path.display()
                );
                Ok((WordSet::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn merge_additional(&self, words: &mut WordSet) -> Result<usize> {
        let path = self.config.additional_path();
        let added = self.read_words(path, words)?;
        tracing::info!("New words added: {}", added);
        tracing::debug!("Word set now holds {} entries", words.len());
        Ok(added)
    }

    fn persist(&self, words: &WordSet) -> Result<PathBuf> {
        let output = self.config.output_path();
        self.storage.write_file(output, words.to_lines().as_bytes())?;
        tracing::debug!("Wrote {} words to {}", words.len(), output.display());
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    }

    impl MemoryStorage {
        fn with(files: &[(&str, &[u8])]) -> Self {
            let storage = Self::default();
            for (path, data) in files {
                storage
                    .files
                    .borrow_mut()
                    .insert(PathBuf::from(path), data.to_vec());
            }
            storage
        }
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| ConsolidationError::MissingSource {
                    path: path.to_path_buf(),
                })
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    struct Paths;

    impl ConfigProvider for Paths {
        fn primary_path(&self) -> &Path {
            Path::new("primary.txt")
        }
        fn additional_path(&self) -> &Path {
            Path::new("additional.txt")
        }
        fn output_path(&self) -> &Path {
            Path::new("out.txt")
        }
    }

    #[test]
    fn test_missing_primary_starts_empty() {
        let pipeline = VocabularyPipeline::new(MemoryStorage::default(), Paths);
        let (words, missing) = pipeline.load_primary().unwrap();
        assert!(words.is_empty());
        assert!(missing);
    }

    #[test]
    fn test_bad_utf8_in_primary_is_fatal() {
        let storage = MemoryStorage::with(&[("primary.txt", &b"ok\n\xff\xfe\n"[..])]);
        let pipeline = VocabularyPipeline::new(storage, Paths);
        match pipeline.load_primary() {
            Err(ConsolidationError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_and_persist() {
        let storage = MemoryStorage::with(&[
            ("primary.txt", &b"apple\nbanana\n"[..]),
            ("additional.txt", &b"Banana\ncherry\n"[..]),
        ]);
        let pipeline = VocabularyPipeline::new(storage, Paths);

        let (mut words, missing) = pipeline.load_primary().unwrap();
        assert!(!missing);
        assert_eq!(words.len(), 2);
        assert_eq!(pipeline.merge_additional(&mut words).unwrap(), 1);
        assert_eq!(pipeline.persist(&words).unwrap(), Path::new("out.txt"));

        let files = pipeline.storage.files.borrow();
        assert_eq!(files[Path::new("out.txt")], b"apple\nbanana\ncherry\n".to_vec());
    }

    #[test]
    fn test_missing_additional_is_fatal() {
        let pipeline = VocabularyPipeline::new(MemoryStorage::default(), Paths);
        let mut words = WordSet::new();
        assert!(matches!(
            pipeline.merge_additional(&mut words),
            Err(ConsolidationError::MissingSource { .. })
        ));
    }

    #[test]
    fn test_decode_reports_first_line() {
        let err = decode_utf8(Path::new("x"), b"\xc3\x28").unwrap_err();
        assert!(matches!(err, ConsolidationError::Decode { line: 1, .. }));
    }

    #[test]
    fn test_decode_line_counts_every_line_ending() {
        let err = decode_utf8(Path::new("x"), b"a\rb\r\nc\n\xff").unwrap_err();
        assert!(matches!(err, ConsolidationError::Decode { line: 4, .. }));
    }
}
