// src/models/batch_summary.rs
use serde::Serialize;

use super::{FileFailure, FileResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_all_files: usize,
    pub unique_all_files: usize,
    pub files: Vec<FileResult>,
    pub failures: Vec<FileFailure>,
}

impl BatchSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_all_files: 0,
            unique_all_files: 0,
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of inputs seen, successful or not.
    #[inline]
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.files.len().saturating_add(self.failures.len())
    }
}
