use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Deduplicated vocabulary. Every entry is trimmed, lowercased and non-empty;
/// iteration yields words in ascending codepoint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw line and inserts it. Returns `true` if the word was new.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize(raw) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    /// Inserts every line of `text`, returning how many distinct new words it added.
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn extend_from_lines(&mut self, text: &str) -> usize {
        let before = self.len();
        for line in text.split(['\n', '\r']) {
            self.insert(line);
        }
        self.len() - before
    }

    pub fn contains(&self, word: &str) -> bool {
        normalize(word).is_some_and(|w| self.words.contains(&w))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// One word per line, each terminated by `\n`.
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.words.iter().map(|w| w.len() + 1).sum());
        for word in &self.words {
            out.push_str(word);
            out.push('\n');
        }
        out
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Outcome of one consolidation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidationReport {
    pub primary_path: PathBuf,
    pub additional_path: PathBuf,
    pub output_path: PathBuf,
    pub primary_missing: bool,
    pub primary_count: usize,
    pub added_count: usize,
    pub total_count: usize,
}

impl ConsolidationReport {
    pub fn counts(&self) -> (usize, usize) {
        (self.primary_count, self.added_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_case_and_whitespace() {
        let mut set = WordSet::new();
        assert!(set.insert("  Apple \t"));
        assert!(!set.insert("APPLE"));
        assert!(!set.insert("   "));
        assert!(!set.insert(""));
        assert_eq!(set.len(), 1);
        assert!(set.contains("apple"));
    }

    #[test]
    fn test_extend_counts_only_new_words() {
        let mut set = WordSet::new();
        set.extend_from_lines("apple\nbanana\n");
        let added = set.extend_from_lines("Banana\r\ncherry\r\n\r\n");
        assert_eq!(added, 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_carriage_return_ends_a_line() {
        let mut set = WordSet::new();
        assert_eq!(set.extend_from_lines("Cat\rdog\rcat\r"), 2);
        assert_eq!(set.extend_from_lines("bird\r\nfish"), 2);
        assert_eq!(set.to_lines(), "bird\ncat\ndog\nfish\n");
    }

    #[test]
    fn test_lines_sorted_by_codepoint() {
        let mut set = WordSet::new();
        set.extend_from_lines("zebra\néclair\nant\nZoo\n");
        // 'é' (U+00E9) sorts after ASCII letters
        assert_eq!(set.to_lines(), "ant\nzebra\nzoo\néclair\n");
    }

    #[test]
    fn test_empty_set_writes_nothing() {
        assert_eq!(WordSet::new().to_lines(), "");
    }
}
