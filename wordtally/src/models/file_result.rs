// src/models/file_result.rs
use serde::Serialize;

use super::{FrequencyEntry, TextStats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub filename: String,
    pub total_word_count: usize,
    pub unique_word_count: usize,
    pub frequency: Vec<FrequencyEntry>,
}

impl FileResult {
    #[inline]
    #[must_use]
    pub fn new(filename: impl Into<String>, stats: TextStats) -> Self {
        Self {
            filename: filename.into(),
            total_word_count: stats.total,
            unique_word_count: stats.unique,
            frequency: stats.frequency,
        }
    }

    #[inline]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.frequency.iter().map(|entry| entry.word.as_str())
    }
}
