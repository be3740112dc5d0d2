// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tantivy-backed index engine
//!
//! One stored document per match record: the relative file path, the
//! matching line number, and one text field per facet. A composite query is
//! the conjunction of the per-facet terms, parsed independently against
//! their fields and combined with `Occur::Must`.

use std::path::Path;

use tantivy::collector::{Count, TopDocs};
use tantivy::query::{BooleanQuery, Occur, Query, QueryParser};
use tantivy::schema::{Field, Schema, Value, STORED, TEXT};
use tantivy::{doc, Index, IndexWriter, TantivyDocument};

use crate::engine::{Hit, IndexEngine};
use crate::errors::EngineError;
use crate::query::{Facet, QueryBuilder};

/// Heap budget for the index writer, in bytes.
const WRITER_HEAP_BYTES: usize = 50_000_000;

fn field_name(facet: Facet) -> &'static str {
    match facet {
        Facet::Definition => "defs",
        Facet::Reference => "refs",
        Facet::Path => "path",
        Facet::History => "hist",
        Facet::FullText => "content",
    }
}

/// Build the index schema shared by the writer and the engine.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.add_text_field("path", TEXT | STORED);
    builder.add_u64_field("line", STORED);
    builder.add_text_field("defs", TEXT);
    builder.add_text_field("refs", TEXT);
    builder.add_text_field("hist", TEXT);
    builder.add_text_field("content", TEXT);
    builder.build()
}

#[derive(Clone, Copy)]
struct Fields {
    path: Field,
    line: Field,
    defs: Field,
    refs: Field,
    hist: Field,
    content: Field,
}

impl Fields {
    fn from_schema(schema: &Schema) -> Result<Self, EngineError> {
        let get = |name: &'static str| {
            schema
                .get_field(name)
                .map_err(|_| EngineError::MissingField(name))
        };
        Ok(Self {
            path: get("path")?,
            line: get("line")?,
            defs: get("defs")?,
            refs: get("refs")?,
            hist: get("hist")?,
            content: get("content")?,
        })
    }

    fn for_facet(&self, facet: Facet) -> Field {
        match facet {
            Facet::Definition => self.defs,
            Facet::Reference => self.refs,
            Facet::Path => self.path,
            Facet::History => self.hist,
            Facet::FullText => self.content,
        }
    }
}

/// One record to index: where the match lives plus the per-facet text the
/// engine should find it under. Unused facets stay empty.
#[derive(Debug, Default, Clone)]
pub struct IndexRecord {
    pub path: String,
    pub line: u64,
    pub definitions: String,
    pub references: String,
    pub history: String,
    pub content: String,
}

/// Writer handle used to populate an index at a data root.
pub struct IndexBuilder {
    writer: IndexWriter,
    fields: Fields,
}

impl IndexBuilder {
    /// Create a fresh index at the data root, replacing nothing; the
    /// directory must not already hold an index.
    pub fn create(data_root: &Path) -> Result<Self, EngineError> {
        std::fs::create_dir_all(data_root).map_err(|source| EngineError::DataRoot {
            path: data_root.to_path_buf(),
            source,
        })?;
        let index = Index::create_in_dir(data_root, build_schema()).map_err(|source| {
            EngineError::Open {
                path: data_root.to_path_buf(),
                source,
            }
        })?;
        let fields = Fields::from_schema(&index.schema())?;
        let writer = index.writer(WRITER_HEAP_BYTES)?;
        Ok(Self { writer, fields })
    }

    pub fn add_record(&mut self, record: &IndexRecord) -> Result<(), EngineError> {
        self.writer.add_document(tantivy::doc!(
            self.fields.path => record.path.as_str(),
            self.fields.line => record.line,
            self.fields.defs => record.definitions.as_str(),
            self.fields.refs => record.references.as_str(),
            self.fields.hist => record.history.as_str(),
            self.fields.content => record.content.as_str(),
        ))?;
        Ok(())
    }

    pub fn commit(&mut self) -> Result<(), EngineError> {
        self.writer.commit()?;
        Ok(())
    }
}

/// Index engine over a prebuilt tantivy index at the environment's data
/// root. Holds the composed query between execute and fetch.
pub struct TantivyEngine {
    index: Index,
    reader: tantivy::IndexReader,
    fields: Fields,
    executed: Option<Box<dyn Query>>,
}

impl TantivyEngine {
    pub fn open(data_root: &Path) -> Result<Self, EngineError> {
        let index = Index::open_in_dir(data_root).map_err(|source| EngineError::Open {
            path: data_root.to_path_buf(),
            source,
        })?;
        let reader = index.reader()?;
        let fields = Fields::from_schema(&index.schema())?;
        Ok(Self {
            index,
            reader,
            fields,
            executed: None,
        })
    }

    fn compose(&self, query: &QueryBuilder) -> Result<Box<dyn Query>, EngineError> {
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        for (facet, term) in query.terms() {
            let field = self.fields.for_facet(facet);
            let parser = QueryParser::for_index(&self.index, vec![field]);
            let parsed = parser.parse_query(term).map_err(|source| EngineError::BadTerm {
                facet: facet.label(),
                source,
            })?;
            clauses.push((Occur::Must, parsed));
        }
        Ok(Box::new(BooleanQuery::new(clauses)))
    }
}

impl IndexEngine for TantivyEngine {
    fn execute(&mut self, query: &QueryBuilder) -> Result<usize, EngineError> {
        let composed = self.compose(query)?;
        let searcher = self.reader.searcher();
        let total = searcher.search(&composed, &Count)?;
        tracing::debug!(query = %query.current_query_text(), total, "composite query executed");
        self.executed = Some(composed);
        Ok(total)
    }

    fn fetch(&mut self, start: usize, count: usize) -> Result<Vec<Hit>, EngineError> {
        let composed = self.executed.as_ref().ok_or(EngineError::NotExecuted)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let top_docs =
            searcher.search(composed, &TopDocs::with_limit(count).and_offset(start))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            let path = doc
                .get_first(self.fields.path)
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
                .to_string();
            let line = doc
                .get_first(self.fields.line)
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            hits.push(Hit { path, line });
        }
        tracing::debug!(start, count, fetched = hits.len(), "hits fetched");
        Ok(hits)
    }
}
