// src/models/file_failure.rs
use serde::Serialize;
use std::fmt;

/// A file that could not be read or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub filename: String,
    pub error: String,
}

impl FileFailure {
    #[inline]
    #[must_use]
    pub fn new(filename: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            filename: filename.into(),
            error: error.to_string(),
        }
    }
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.filename, self.error)
    }
}
