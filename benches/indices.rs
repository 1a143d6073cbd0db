use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fnv::FnvHashMap;

use reviewidx::indices::word_indices;

const VOCAB_SIZE: usize = 10_000;
const REVIEW_WORDS: usize = 200;

fn word(idx: usize) -> String {
    format!("w{}", idx)
}

fn review() -> String {
    // Every third word is out of vocabulary.
    (0..REVIEW_WORDS)
        .map(|i| {
            if i % 3 == 0 {
                format!("oov{}", i)
            } else {
                word(i * 37 % VOCAB_SIZE)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn word_indices_benchmark(c: &mut Criterion) {
    let review = review();

    let std_mapping: HashMap<String, usize> = (0..VOCAB_SIZE).map(|i| (word(i), i)).collect();
    let fnv_mapping: FnvHashMap<String, usize> = (0..VOCAB_SIZE).map(|i| (word(i), i)).collect();

    c.bench_function("word-indices-200-words-std", |b| {
        b.iter(|| word_indices(&std_mapping, black_box(&review)))
    });

    c.bench_function("word-indices-200-words-fnv", |b| {
        b.iter(|| word_indices(&fnv_mapping, black_box(&review)))
    });
}

criterion_group!(benches, word_indices_benchmark);
criterion_main!(benches);
