// src/models/frequency_entry.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
