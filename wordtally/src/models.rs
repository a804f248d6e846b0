// src/models.rs
mod batch_summary;
mod file_failure;
mod file_result;
mod frequency_entry;
mod text_stats;
mod upload;

pub use batch_summary::BatchSummary;
pub use file_failure::FileFailure;
pub use file_result::FileResult;
pub use frequency_entry::FrequencyEntry;
pub use text_stats::TextStats;
pub use upload::Upload;
