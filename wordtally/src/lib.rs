// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod report;

pub use cli::{Args, execute, run};
pub use config::{Config, find_config, load_config, resolve_config};
pub use crate::core::aggregate::{
    BatchAggregator, analyze_batch, analyze_file, analyze_text, analyze_upload, count_tokens,
};
pub use crate::core::collect::{CollectOptions, collect_uploads};
pub use crate::core::decode::decode_text;
pub use crate::core::tokenizer::{normalize, tokenize};
pub use error::WordTallyError;
pub use models::{BatchSummary, FileFailure, FileResult, FrequencyEntry, TextStats, Upload};
pub use report::Format;
