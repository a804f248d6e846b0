// src/config.rs
use anyhow::{Context as _, Result};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Format;

pub const CONFIG_FILE_NAME: &str = "wordtally.toml";

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub collect: CollectConfig,
    pub report: ReportConfig,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CollectConfig {
    /// Extensions picked up when walking directories.
    pub extensions: Vec<String>,
    /// Glob patterns skipped when walking directories.
    pub exclude: Vec<String>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            extensions: vec![String::from("txt")],
            exclude: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<Format>,
    pub top: Option<usize>,
}

/// Parses a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
#[inline]
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Looks for a config file in `dir` and then in each of its parents.
#[inline]
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the explicit config file if one is given, otherwise the nearest
/// one above the current directory, otherwise the defaults.
///
/// # Errors
///
/// Returns an error if a config file is found but cannot be loaded, or if
/// the current directory is not accessible.
#[inline]
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match find_config(&env::current_dir()?) {
        Some(path) => {
            info!("using config file {}", path.display());
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}
