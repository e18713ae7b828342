//! In-memory full-text indexing and ranked retrieval.
//!
//! Documents (id + text) are tokenized into an inverted index with
//! per-term IDF statistics; free-text queries come back as a ranked
//! list of document ids. Everything lives in process memory behind
//! [`IndexManager`], the sole owner and mutator of index state.

pub mod error;
pub mod index;
pub mod manager;
pub mod scoring;
pub mod tokenizer;

pub use error::EngineError;
pub use manager::IndexManager;
pub use scoring::ScoredDoc;
