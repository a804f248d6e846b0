// src/models/text_stats.rs
use serde::Serialize;

use super::FrequencyEntry;

/// Word statistics of a single text.
///
/// `frequency` is ordered by descending count, with words of equal count
/// kept in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub total: usize,
    pub unique: usize,
    pub frequency: Vec<FrequencyEntry>,
}

impl TextStats {
    #[inline]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.frequency.iter().map(|entry| entry.word.as_str())
    }
}
