// Word frequency counting
//
// Text is split on whitespace, surrounding punctuation is stripped and
// tokens are case-folded before counting.

use crate::config::TokenizerConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// A counted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordCount<'a> {
    pub word: &'a str,
    pub count: usize,
}

/// Occurrence counts keyed by normalized word
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    /// Words in order of first appearance
    order: Vec<String>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of an already-normalized word
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    /// Count for a word, 0 if it was never seen
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of counted tokens
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate words in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = WordCount<'_>> {
        self.order.iter().map(|w| WordCount {
            word: w,
            count: self.counts[w],
        })
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Equal counts keep first-appearance order.
    pub fn most_common(&self, n: usize) -> Vec<WordCount<'_>> {
        let mut entries: Vec<WordCount<'_>> = self.iter().collect();
        // sort_by is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        entries
    }

    /// Snapshot as a plain map
    pub fn to_map(&self) -> HashMap<String, usize> {
        self.counts.clone()
    }
}

/// Split text into normalized tokens
pub fn tokenize<'a>(
    text: &'a str,
    config: &'a TokenizerConfig,
) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace().filter_map(move |raw| {
        let word = raw.trim_matches(|c: char| config.strip_chars.contains(c));
        if word.is_empty() {
            None
        } else if config.lowercase {
            Some(word.to_lowercase())
        } else {
            Some(word.to_string())
        }
    })
}

/// Count words in an in-memory string
pub fn count_text(text: &str, config: &TokenizerConfig) -> WordFrequencies {
    let mut freqs = WordFrequencies::new();
    for word in tokenize(text, config) {
        freqs.add(&word);
    }
    freqs
}

/// Read a UTF-8 text file and count its words
pub fn count_word_frequencies(path: &Path, config: &TokenizerConfig) -> Result<WordFrequencies> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    debug!("Reading {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let freqs = count_text(&text, config);

    info!(
        "Counted {} words ({} distinct) in {}",
        freqs.total(),
        freqs.len(),
        path.display()
    );
    Ok(freqs)
}
