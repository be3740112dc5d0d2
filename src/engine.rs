// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine contract and result materialization
//!
//! The fetcher runs a validated query exactly once: `execute` reports the
//! total hit count, then a single full-window `fetch` drains `[0, total)`
//! into an ordered list in the engine's native ranking order. This layer
//! never re-sorts.

use crate::errors::EngineError;
use crate::query::QueryBuilder;

/// One engine-reported match. The path is relative to the source root and
/// only resolved to an absolute path at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub path: String,
    /// 1-based; which line matches is defined by the engine.
    pub line: u64,
}

impl Hit {
    pub fn new(path: impl Into<String>, line: u64) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

/// Narrow contract the driver needs from an index engine.
pub trait IndexEngine {
    /// Run the composite query and report the total number of matching
    /// entries. Must be called before any fetch.
    fn execute(&mut self, query: &QueryBuilder) -> Result<usize, EngineError>;

    /// Retrieve hits in the half-open range `[start, start+count)` of the
    /// executed result set, in engine order. Never returns more than the
    /// total reported by `execute`.
    fn fetch(&mut self, start: usize, count: usize) -> Result<Vec<Hit>, EngineError>;
}

/// Executes one validated query and drains its hits.
pub struct ResultFetcher<E> {
    engine: E,
    total: Option<usize>,
}

impl<E: IndexEngine> ResultFetcher<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            total: None,
        }
    }

    /// Execute the query against the engine. The caller must have checked
    /// `query.is_valid()` and the environment's data root beforehand.
    pub fn execute(&mut self, query: &QueryBuilder) -> Result<usize, EngineError> {
        let total = self.engine.execute(query)?;
        tracing::debug!(total, "query executed");
        self.total = Some(total);
        Ok(total)
    }

    /// Fetch the window `[start, start+count)` into `out`, clearing any
    /// previous contents when a new fetch cycle begins at index 0. The
    /// window must lie within the total reported by `execute`.
    pub fn fetch(
        &mut self,
        start: usize,
        count: usize,
        out: &mut Vec<Hit>,
    ) -> Result<(), EngineError> {
        let total = self.total.ok_or(EngineError::NotExecuted)?;
        debug_assert!(start + count <= total, "fetch window exceeds total");
        if start == 0 {
            out.clear();
        }
        if count == 0 {
            return Ok(());
        }
        out.extend(self.engine.fetch(start, count)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine fake backed by a fixed hit list.
    struct FixedEngine {
        hits: Vec<Hit>,
        executed: bool,
    }

    impl FixedEngine {
        fn new(hits: Vec<Hit>) -> Self {
            Self {
                hits,
                executed: false,
            }
        }
    }

    impl IndexEngine for FixedEngine {
        fn execute(&mut self, _query: &QueryBuilder) -> Result<usize, EngineError> {
            self.executed = true;
            Ok(self.hits.len())
        }

        fn fetch(&mut self, start: usize, count: usize) -> Result<Vec<Hit>, EngineError> {
            assert!(self.executed, "fetch without execute");
            Ok(self.hits[start..start + count].to_vec())
        }
    }

    fn sample_hits() -> Vec<Hit> {
        vec![
            Hit::new("a.c", 10),
            Hit::new("b/c.c", 3),
            Hit::new("d.c", 7),
        ]
    }

    #[test]
    fn fetch_before_execute_fails() {
        let mut fetcher = ResultFetcher::new(FixedEngine::new(sample_hits()));
        let mut out = Vec::new();
        assert!(matches!(
            fetcher.fetch(0, 1, &mut out),
            Err(EngineError::NotExecuted)
        ));
    }

    #[test]
    fn full_window_fetch_returns_all_hits_in_order() {
        let mut fetcher = ResultFetcher::new(FixedEngine::new(sample_hits()));
        let mut query = QueryBuilder::new();
        query.set_freetext("foo");

        let total = fetcher.execute(&query).expect("execute");
        assert_eq!(total, 3);

        let mut out = Vec::new();
        fetcher.fetch(0, total, &mut out).expect("fetch");
        assert_eq!(out, sample_hits());
    }

    #[test]
    fn fetch_clears_stale_results_at_cycle_start() {
        let mut fetcher = ResultFetcher::new(FixedEngine::new(sample_hits()));
        let mut query = QueryBuilder::new();
        query.set_freetext("foo");
        let total = fetcher.execute(&query).expect("execute");

        let mut out = vec![Hit::new("stale.c", 1)];
        fetcher.fetch(0, total, &mut out).expect("fetch");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Hit::new("a.c", 10));
    }

    #[test]
    fn zero_count_fetch_is_a_no_op() {
        let mut fetcher = ResultFetcher::new(FixedEngine::new(Vec::new()));
        let mut query = QueryBuilder::new();
        query.set_freetext("foo");
        assert_eq!(fetcher.execute(&query).expect("execute"), 0);

        let mut out = vec![Hit::new("stale.c", 1)];
        fetcher.fetch(0, 0, &mut out).expect("fetch");
        assert!(out.is_empty());
    }
}
