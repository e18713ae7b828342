use std::collections::HashMap;

/// Term-level inverted index: term -> (document id -> term frequency).
/// A posting exists for (term, doc) iff the term occurred in some text
/// indexed under that id; see [`InvertedIndex::apply`] for the re-index
/// caveat.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<String, u32>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a document's term frequencies into the postings. Each
    /// (term, id) cell is overwritten, not incremented.
    ///
    /// Known inherited behavior: postings for terms that appeared in an
    /// earlier text of `id` but are absent from `tf` are NOT retracted;
    /// they keep attributing the old frequency to this id.
    pub fn apply(&mut self, id: &str, tf: &HashMap<String, u32>) {
        for (term, freq) in tf {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(id.to_string(), *freq);
        }
    }

    /// Postings for one term, if any document contains it.
    pub fn postings(&self, term: &str) -> Option<&HashMap<String, u32>> {
        self.postings.get(term)
    }

    /// Number of distinct documents containing `term`.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.postings.keys()
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }
}

/// Recompute the whole IDF table from the current index state:
/// `idf(term) = ln(max(N,1) / max(df,1))`. Total recomputation after
/// every write, never incremental; terms with no postings get no entry.
pub fn rebuild_idf(index: &InvertedIndex, total_docs: usize) -> HashMap<String, f64> {
    let n = total_docs.max(1) as f64;
    index
        .terms()
        .map(|term| {
            let df = index.doc_frequency(term).max(1) as f64;
            (term.clone(), (n / df).ln())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::term_frequencies;

    #[test]
    fn apply_overwrites_frequency_for_same_doc() {
        let mut index = InvertedIndex::new();
        index.apply("d1", &term_frequencies("rust rust rust"));
        index.apply("d1", &term_frequencies("rust"));
        assert_eq!(index.postings("rust").unwrap().get("d1"), Some(&1));
        assert_eq!(index.doc_frequency("rust"), 1);
    }

    #[test]
    fn apply_keeps_postings_for_dropped_terms() {
        let mut index = InvertedIndex::new();
        index.apply("d1", &term_frequencies("alpha beta"));
        index.apply("d1", &term_frequencies("alpha"));
        // beta was dropped from the new text but its posting survives
        assert_eq!(index.postings("beta").unwrap().get("d1"), Some(&1));
    }

    #[test]
    fn idf_is_zero_for_ubiquitous_terms() {
        let mut index = InvertedIndex::new();
        index.apply("d1", &term_frequencies("shared one"));
        index.apply("d2", &term_frequencies("shared two"));
        let idf = rebuild_idf(&index, 2);
        assert_eq!(idf.get("shared"), Some(&0.0));
        assert!((idf.get("one").unwrap() - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn idf_floors_doc_count_at_one() {
        let index = InvertedIndex::new();
        assert!(rebuild_idf(&index, 0).is_empty());
    }
}
