// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for one query/response cycle
//!
//! Every failure terminates the invocation with exit code 1; there are no
//! retries and no partial results. User-input failures additionally get the
//! usage block on stderr, engine failures do not.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level failure of one invocation.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to read configuration file {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("no data root configured; specify a configuration file with -R")]
    MissingDataRoot,

    #[error("you did not specify a valid query")]
    InvalidQuery,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Whether the failure was caused by user input and should be
    /// accompanied by the usage text.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SearchError::ConfigLoad { .. }
                | SearchError::MissingDataRoot
                | SearchError::InvalidQuery
        )
    }
}

/// Failure inside the index engine during execute or fetch.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot open index at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: tantivy::TantivyError,
    },

    #[error("cannot prepare data root {path}: {source}")]
    DataRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {facet} term: {source}")]
    BadTerm {
        facet: &'static str,
        #[source]
        source: tantivy::query::QueryParserError,
    },

    #[error("index schema is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("fetch requested before execute")]
    NotExecuted,

    #[error(transparent)]
    Tantivy(#[from] tantivy::TantivyError),
}
