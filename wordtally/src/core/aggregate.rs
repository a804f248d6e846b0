// src/core/aggregate.rs
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

use crate::core::decode::decode_text;
use crate::core::tokenizer::tokenize;
use crate::error::WordTallyError;
use crate::models::{BatchSummary, FileFailure, FileResult, FrequencyEntry, TextStats, Upload};

/// Counts a token sequence.
///
/// The frequency table is sorted by descending count. The sort is stable and
/// entries start out in first-seen order, so words with the same count keep
/// the order in which they first appeared.
#[inline]
#[must_use]
pub fn count_tokens<S: AsRef<str>>(tokens: &[S]) -> TextStats {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut frequency: Vec<FrequencyEntry> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(entry) = positions
            .get(token)
            .and_then(|&index| frequency.get_mut(index))
        {
            entry.count = entry.count.saturating_add(1);
        } else {
            positions.insert(token, frequency.len());
            frequency.push(FrequencyEntry::new(token, 1));
        }
    }

    frequency.sort_by(|a, b| b.count.cmp(&a.count));

    TextStats {
        total: tokens.len(),
        unique: frequency.len(),
        frequency,
    }
}

/// Tokenizes and counts a text.
#[inline]
#[must_use]
pub fn analyze_text(text: &str) -> TextStats {
    count_tokens(&tokenize(text))
}

#[inline]
#[must_use]
pub fn analyze_file(filename: &str, text: &str) -> FileResult {
    FileResult::new(filename, analyze_text(text))
}

/// Decodes and analyzes one uploaded file.
///
/// # Errors
///
/// Returns [`WordTallyError::Decode`] if the bytes are neither UTF-8 nor GBK.
#[inline]
pub fn analyze_upload(upload: &Upload) -> Result<FileResult, WordTallyError> {
    let text = decode_text(&upload.bytes)?;
    Ok(analyze_file(&upload.filename, &text))
}

/// Builds a [`BatchSummary`] one file at a time.
///
/// Files are kept in the order they are added. A file that fails is recorded
/// as a failure and contributes nothing to the totals.
#[derive(Debug, Default)]
pub struct BatchAggregator {
    vocabulary: HashSet<String>,
    summary: BatchSummary,
}

impl BatchAggregator {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_result(&mut self, result: FileResult) {
        debug!(
            "{}: {} words, {} unique",
            result.filename, result.total_word_count, result.unique_word_count
        );
        self.summary.total_all_files = self
            .summary
            .total_all_files
            .saturating_add(result.total_word_count);
        self.vocabulary.extend(result.words().map(str::to_owned));
        self.summary.files.push(result);
    }

    #[inline]
    pub fn add_failure(&mut self, failure: FileFailure) {
        warn!("skipping {failure}");
        self.summary.failures.push(failure);
    }

    #[inline]
    pub fn add_upload(&mut self, upload: &Upload) {
        match analyze_upload(upload) {
            Ok(result) => self.add_result(result),
            Err(err) => self.add_failure(FileFailure::new(upload.filename.as_str(), err)),
        }
    }

    #[inline]
    #[must_use]
    pub fn finish(self) -> BatchSummary {
        let mut summary = self.summary;
        summary.unique_all_files = self.vocabulary.len();
        summary
    }
}

/// Analyzes every upload in order and combines the results.
#[inline]
#[must_use]
pub fn analyze_batch(uploads: &[Upload]) -> BatchSummary {
    let mut aggregator = BatchAggregator::new();
    for upload in uploads {
        aggregator.add_upload(upload);
    }
    aggregator.finish()
}
