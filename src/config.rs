// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment configuration loaded from the -R file
//!
//! The environment is read once at process start and is read-only for the
//! rest of the invocation. The data root locates the prebuilt index; the
//! source root anchors relative hit paths at render time.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::SearchError;

/// Process-wide configuration state, deserialized from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Directory holding the search index.
    pub data_root: Option<PathBuf>,
    /// Directory hit paths are relative to.
    pub source_root: Option<PathBuf>,
}

impl Environment {
    /// Load the environment from a configuration file. An unreadable or
    /// unparsable file is fatal; the pipeline must not continue without a
    /// populated environment.
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path).map_err(|e| SearchError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| SearchError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The data root, required before a query may be executed.
    pub fn data_root(&self) -> Result<&Path, SearchError> {
        match self.data_root.as_deref() {
            Some(root) if !root.as_os_str().is_empty() => Ok(root),
            _ => Err(SearchError::MissingDataRoot),
        }
    }

    /// Resolve a hit's relative path against the source root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        match self.source_root.as_deref() {
            Some(root) => root.join(relative),
            None => PathBuf::from(relative),
        }
    }
}
