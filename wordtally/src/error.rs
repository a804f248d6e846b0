// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors confined to a single input file.
///
/// None of these abort a batch: they are recorded as a failure for the file
/// that produced them.
#[derive(Error, Debug)]
pub enum WordTallyError {
    #[error("could not decode {len} bytes as {}", .attempted.join(" or "))]
    Decode {
        len: usize,
        attempted: Vec<&'static str>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no such file or directory: {}", .0.display())]
    MissingInput(PathBuf),
}
