//! Corpus loader: line-pair text format
//!
//! Odd lines hold target sentences, even lines their translations. Ids are
//! handed out 1, 2, 3, … in read order; trailing blank lines and a dangling
//! half pair are dropped.

use super::store::SentenceStore;
use crate::error::{DrillError, Result};
use std::fs;
use std::path::Path;

/// Built-in corpus shipped with the binary
const EMBEDDED: &str = include_str!("../../data/sentences.txt");

/// Entry points for building a [`SentenceStore`]
pub struct Corpus;

impl Corpus {
    /// Parse line-pair text into a store
    pub fn parse(text: &str) -> SentenceStore {
        let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        SentenceStore::from_pairs(lines.chunks_exact(2).map(|pair| (pair[0], pair[1])))
    }

    /// Load a corpus file; an unreadable or empty corpus is an error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SentenceStore> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DrillError::Corpus(format!("{}: {}", path.display(), e)))?;

        let store = Self::parse(&content);
        if store.is_empty() {
            return Err(DrillError::Corpus(format!(
                "{}: no sentence pairs found",
                path.display()
            )));
        }

        log::debug!("loaded {} sentences from {}", store.len(), path.display());
        Ok(store)
    }

    /// The corpus compiled into the binary
    pub fn embedded() -> SentenceStore {
        Self::parse(EMBEDDED)
    }
}
