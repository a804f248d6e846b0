// src/core/collect.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::WordTallyError;
use crate::models::{FileFailure, Upload};

/// Rules for picking files out of directory inputs.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    extensions: Vec<String>,
    exclude: Vec<Pattern>,
}

impl CollectOptions {
    /// Builds the options from extension names and glob exclude patterns.
    ///
    /// Extensions are compared case-insensitively and may be given with or
    /// without a leading dot. Patterns are matched against paths relative to
    /// the directory being walked, and against bare file names.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not valid glob syntax.
    #[inline]
    pub fn new<E, P>(extensions: E, exclude: P) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        let exclude = exclude
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref().trim();
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid exclude pattern: {pattern}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extensions,
            exclude,
        })
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        let name = relative.file_name().map(Path::new);
        self.exclude.iter().any(|pattern| {
            pattern.matches_path(relative) || name.is_some_and(|name| pattern.matches_path(name))
        })
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extensions: vec![String::from("txt")],
            exclude: Vec::new(),
        }
    }
}

/// Resolves command-line inputs into uploads, in input order.
///
/// A file input is taken as-is. A directory input is walked recursively in
/// file-name order, keeping files with an accepted extension that are
/// neither hidden nor excluded. Anything that cannot be read becomes a
/// failure for that one file.
#[inline]
#[must_use]
pub fn collect_uploads(
    inputs: &[PathBuf],
    options: &CollectOptions,
) -> Vec<Result<Upload, FileFailure>> {
    let mut uploads = Vec::new();

    for input in inputs {
        if input.is_dir() {
            info!("scanning directory {}", input.display());
            collect_directory(input, options, &mut uploads);
        } else if input.exists() {
            uploads.push(read_upload(input));
        } else {
            let err = WordTallyError::MissingInput(input.clone());
            uploads.push(Err(FileFailure::new(input.display().to_string(), err)));
        }
    }

    uploads
}

fn collect_directory(
    root: &Path,
    options: &CollectOptions,
    uploads: &mut Vec<Result<Upload, FileFailure>>,
) {
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip(e, root, options))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let name = err
                    .path()
                    .unwrap_or(root)
                    .display()
                    .to_string();
                uploads.push(Err(FileFailure::new(name, err)));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !options.accepts_extension(entry.path()) {
            debug!("ignoring {}", entry.path().display());
            continue;
        }

        uploads.push(read_upload(entry.path()));
    }
}

fn read_upload(path: &Path) -> Result<Upload, FileFailure> {
    let name = path.display().to_string();
    match fs::read(path) {
        Ok(bytes) => {
            debug!("read {} bytes from {name}", bytes.len());
            Ok(Upload::new(name, bytes))
        }
        Err(source) => {
            let err = WordTallyError::Read {
                path: path.to_path_buf(),
                source,
            };
            Err(FileFailure::new(name, err))
        }
    }
}

/// Hidden entries and excluded paths below the walk root are skipped. The
/// root itself is never skipped.
fn should_skip(entry: &DirEntry, root: &Path, options: &CollectOptions) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if is_hidden(entry) {
        return true;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    options.is_excluded(relative)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}
