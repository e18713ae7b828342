use crate::index::InvertedIndex;
use crate::tokenizer::term_frequencies;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One ranked hit: document id and its accumulated relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub id: String,
    pub score: f64,
}

/// Rank all documents matching `query` against the given index and IDF
/// table, best first.
///
/// Per query term t with frequency qf, every posting (doc, df) of t adds
/// `qf * idf(t) * df * idf(t)` to the document's score. The doubled IDF
/// factor is the inherited scoring contract, reproduced as-is rather
/// than the conventional single-IDF TF-IDF product.
///
/// Equal scores order by document id ascending so rankings are stable
/// across runs. A query with no known terms returns an empty list.
pub fn score(query: &str, index: &InvertedIndex, idf: &HashMap<String, f64>) -> Vec<ScoredDoc> {
    let query_tf = term_frequencies(query);
    let mut scores: HashMap<String, f64> = HashMap::new();

    for (term, query_freq) in &query_tf {
        let term_idf = idf.get(term).copied().unwrap_or(0.0);
        if let Some(postings) = index.postings(term) {
            for (doc_id, doc_freq) in postings {
                *scores.entry(doc_id.clone()).or_insert(0.0) +=
                    f64::from(*query_freq) * term_idf * f64::from(*doc_freq) * term_idf;
            }
        }
    }

    let mut ranked: Vec<ScoredDoc> = scores
        .into_iter()
        .map(|(id, score)| ScoredDoc { id, score })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
}
