use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref TERM_RE: Regex = Regex::new(r"[a-z0-9]+").expect("valid regex");
}

/// Tokenize text into lowercase alphanumeric terms. Terms are maximal
/// `[a-z0-9]` runs of the lowercased input, returned in source order with
/// duplicates retained. Empty or punctuation-only input yields no terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenize and count occurrences per term.
pub fn term_frequencies(text: &str) -> HashMap<String, u32> {
    let mut tf: HashMap<String, u32> = HashMap::new();
    for term in tokenize(text) {
        *tf.entry(term).or_insert(0) += 1;
    }
    tf
}
