use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::tokenize;
use engine::IndexManager;

const WORDS: &[&str] = &[
    "rust", "search", "index", "token", "query", "score", "engine", "memory",
    "document", "ranking", "inverted", "frequency", "corpus", "retrieval",
];

fn synthetic_text(seed: usize, len: usize) -> String {
    (0..len)
        .map(|i| WORDS[(seed * 31 + i * 7) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synthetic_text(1, 2_000);
    c.bench_function("tokenize_2k_terms", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let manager = IndexManager::new();
    for doc in 0..500 {
        manager
            .index_document(&format!("doc-{doc}"), &synthetic_text(doc, 120))
            .unwrap();
    }
    c.bench_function("search_500_docs", |b| {
        b.iter(|| manager.search("rust retrieval ranking", 10))
    });
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
