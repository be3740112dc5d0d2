// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composite query assembly
//!
//! A query is the union of up to five independent facet terms. Facets are
//! accumulated one at a time while options are parsed; the descriptor is
//! valid as soon as any single facet carries a non-empty term.

use std::fmt;

/// One independent search dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Definition,
    Reference,
    Path,
    History,
    FullText,
}

impl Facet {
    /// Short label used in diagnostics and query-text rendering.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Definition => "defs",
            Facet::Reference => "refs",
            Facet::Path => "path",
            Facet::History => "hist",
            Facet::FullText => "text",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulates per-facet search terms into one composite query descriptor.
///
/// Setting a facet overwrites any prior value for that facet and never
/// touches the others. An empty or whitespace-only term leaves the facet
/// unset rather than failing.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    definition: Option<String>,
    reference: Option<String>,
    path: Option<String>,
    history: Option<String>,
    freetext: Option<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_definition(&mut self, term: &str) {
        self.definition = normalize(term);
    }

    pub fn set_symbol(&mut self, term: &str) {
        self.reference = normalize(term);
    }

    pub fn set_path(&mut self, term: &str) {
        self.path = normalize(term);
    }

    pub fn set_history(&mut self, term: &str) {
        self.history = normalize(term);
    }

    pub fn set_freetext(&mut self, term: &str) {
        self.freetext = normalize(term);
    }

    /// True iff at least one facet carries a term. An all-unset descriptor
    /// must not be executed.
    pub fn is_valid(&self) -> bool {
        self.terms().next().is_some()
    }

    /// The set facets in declaration order, paired with their terms.
    pub fn terms(&self) -> impl Iterator<Item = (Facet, &str)> {
        [
            (Facet::Definition, &self.definition),
            (Facet::Reference, &self.reference),
            (Facet::Path, &self.path),
            (Facet::History, &self.history),
            (Facet::FullText, &self.freetext),
        ]
        .into_iter()
        .filter_map(|(facet, slot)| slot.as_deref().map(|term| (facet, term)))
    }

    /// Human-readable rendering of the composite query, used only for the
    /// no-match notice. Does not drive the search itself.
    pub fn current_query_text(&self) -> String {
        let parts: Vec<String> = self
            .terms()
            .map(|(facet, term)| format!("{}:{}", facet, term))
            .collect();
        parts.join(" ")
    }
}

fn normalize(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
