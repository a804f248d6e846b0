// src/report.rs
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::models::{BatchSummary, FileFailure, FileResult, FrequencyEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Writes the result of a single file.
///
/// `top` limits the rows of the frequency table in table form; JSON and YAML
/// always carry the full table.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
#[inline]
pub fn render_file<W: Write>(
    out: &mut W,
    result: &FileResult,
    format: Format,
    top: Option<usize>,
) -> Result<()> {
    match format {
        Format::Table => {
            writeln!(out, "Total words:  {}", result.total_word_count)?;
            writeln!(out, "Unique words: {}", result.unique_word_count)?;
            writeln!(out)?;
            write_frequency_table(out, &result.frequency, top)
        }
        Format::Json => write_json(out, result),
        Format::Yaml => write_yaml(out, result),
    }
}

/// Writes a file that could not be processed.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
#[inline]
pub fn render_failure<W: Write>(out: &mut W, failure: &FileFailure, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            writeln!(out, "Failed to process {failure}")?;
            Ok(())
        }
        Format::Json => write_json(out, failure),
        Format::Yaml => write_yaml(out, failure),
    }
}

/// Writes a batch: the combined totals, one summary row per file, the
/// failures, then each file's frequency table.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
#[inline]
pub fn render_batch<W: Write>(
    out: &mut W,
    summary: &BatchSummary,
    format: Format,
    top: Option<usize>,
) -> Result<()> {
    match format {
        Format::Table => {}
        Format::Json => return write_json(out, summary),
        Format::Yaml => return write_yaml(out, summary),
    }

    writeln!(
        out,
        "Files:              {} ({} failed)",
        summary.file_count(),
        summary.failures.len()
    )?;
    writeln!(out, "Total words (all):  {}", summary.total_all_files)?;
    writeln!(out, "Unique words (all): {}", summary.unique_all_files)?;
    writeln!(out)?;

    writeln!(out, "{:<40} {:>8} {:>8}", "FILE", "TOTAL", "UNIQUE")?;
    writeln!(out, "{:-<58}", "")?;
    for file in &summary.files {
        writeln!(
            out,
            "{:<40} {:>8} {:>8}",
            file.filename, file.total_word_count, file.unique_word_count
        )?;
    }

    if summary.has_failures() {
        writeln!(out)?;
        writeln!(out, "Failed:")?;
        for failure in &summary.failures {
            writeln!(out, "  {failure}")?;
        }
    }

    for file in &summary.files {
        writeln!(out)?;
        writeln!(out, "== {} ==", file.filename)?;
        write_frequency_table(out, &file.frequency, top)?;
    }

    Ok(())
}

fn write_frequency_table<W: Write>(
    out: &mut W,
    frequency: &[FrequencyEntry],
    top: Option<usize>,
) -> Result<()> {
    writeln!(out, "{:<20} {:>8}", "WORD", "COUNT")?;
    writeln!(out, "{:-<29}", "")?;
    for entry in frequency.iter().take(top.unwrap_or(usize::MAX)) {
        writeln!(out, "{:<20} {:>8}", entry.word, entry.count)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize result as JSON")?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_yaml_ng::to_writer(out, value).context("Failed to serialize result as YAML")
}
