use crate::error::EngineError;
use crate::index::{rebuild_idf, InvertedIndex};
use crate::scoring::{score, ScoredDoc};
use crate::tokenizer::term_frequencies;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct IndexState {
    docs: HashMap<String, String>,
    inverted: InvertedIndex,
    idf: HashMap<String, f64>,
}

/// Sole owner and mutator of the document store, inverted index, and IDF
/// table. One lock covers all three: a write holds the guard across the
/// postings update and the IDF rebuild, so a reader never observes
/// postings written ahead of their matching IDF values.
#[derive(Default)]
pub struct IndexManager {
    state: RwLock<IndexState>,
}

impl IndexManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index or replace one document. Tokenizes `text`, overwrites the
    /// document's postings cells, stores the raw text, and rebuilds the
    /// IDF table in full. Rejects empty id/text without touching state.
    pub fn index_document(&self, id: &str, text: &str) -> Result<(), EngineError> {
        if id.trim().is_empty() {
            return Err(EngineError::InvalidInput("document id must be non-empty"));
        }
        if text.trim().is_empty() {
            return Err(EngineError::InvalidInput("document text must be non-empty"));
        }

        let tf = term_frequencies(text);
        let mut state = self.state.write();
        state.docs.insert(id.to_string(), text.to_string());
        state.inverted.apply(id, &tf);
        state.idf = rebuild_idf(&state.inverted, state.docs.len());
        tracing::debug!(
            id,
            terms = tf.len(),
            num_docs = state.docs.len(),
            num_terms = state.inverted.num_terms(),
            "indexed document"
        );
        Ok(())
    }

    /// Rank documents matching `query` and return at most `limit` hits.
    /// Empty or unmatched queries and `limit == 0` return an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredDoc> {
        if limit == 0 {
            return Vec::new();
        }
        let state = self.state.read();
        let mut ranked = score(query, &state.inverted, &state.idf);
        ranked.truncate(limit);
        ranked
    }

    /// Number of distinct document ids ever indexed.
    pub fn num_docs(&self) -> usize {
        self.state.read().docs.len()
    }
}
