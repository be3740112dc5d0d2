// SPDX-License-Identifier: MIT OR Apache-2.0

//! Invocation orchestrator
//!
//! One linear run per invocation: validate the query, execute it once
//! against the engine, drain the full result window, render. No retries,
//! no paging, no background work.

use std::io::Write;

use crate::config::Environment;
use crate::engine::{Hit, IndexEngine, ResultFetcher};
use crate::errors::SearchError;
use crate::output;
use crate::query::QueryBuilder;

/// Run one validated query against the engine and render the outcome to
/// `out`. The environment's data root must already be checked; zero hits
/// are a success and emit the no-match notice.
pub fn run<E: IndexEngine, W: Write>(
    env: &Environment,
    query: &QueryBuilder,
    engine: E,
    out: &mut W,
) -> Result<(), SearchError> {
    if !query.is_valid() {
        return Err(SearchError::InvalidQuery);
    }

    let mut fetcher = ResultFetcher::new(engine);
    let total = fetcher.execute(query)?;

    let mut hits: Vec<Hit> = Vec::new();
    if total > 0 {
        fetcher.fetch(0, total, &mut hits)?;
    }

    if hits.is_empty() {
        output::render_no_match(out, &query.current_query_text())?;
    } else {
        output::render_hits(out, env, &hits)?;
    }
    Ok(())
}
