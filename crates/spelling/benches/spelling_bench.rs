// Criterion benchmarks for the spelling engine.
//
// Uses the sample word list bundled with the integration tests.
//
// Run:
//   cargo bench -p spelling

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use spelling::{Dictionary, LookupOptions, SearchOptions};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/en_sample.txt")
}

fn load_sample() -> Dictionary {
    Dictionary::from_path(sample_path()).expect("failed to load sample word list")
}

fn sample_words() -> Vec<String> {
    std::fs::read_to_string(sample_path())
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.rsplit_once(' ').map(|(word, _)| word.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build the sample dictionary from disk.
fn bench_load(c: &mut Criterion) {
    c.bench_function("load_sample", |b| b.iter(|| black_box(load_sample())));
}

/// Look up every word of the sample (all hits).
fn bench_lookup_hits(c: &mut Criterion) {
    let dict = load_sample();
    let words = sample_words();
    let options = LookupOptions::default();

    c.bench_function("lookup_sample_hits", |b| {
        b.iter(|| {
            for word in &words {
                black_box(dict.lookup(word, &options));
            }
        });
    });
}

/// Suggest corrections for a handful of misspellings.
fn bench_suggest_misspelled(c: &mut Criterion) {
    let dict = load_sample();
    let misspelled = ["helo", "wrold", "teh", "freind", "mountian", "beutiful"];
    let options = LookupOptions::default();

    c.bench_function("suggest_6_misspelled", |b| {
        b.iter(|| {
            for word in &misspelled {
                black_box(dict.lookup(word, &options));
            }
        });
    });
}

/// Prefix search at the default depth.
fn bench_search(c: &mut Criterion) {
    let dict = load_sample();
    let prefixes = ["a", "th", "wh", "he", "co"];
    let options = SearchOptions::default();

    c.bench_function("search_5_prefixes", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                black_box(dict.search(prefix, &options));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_lookup_hits,
    bench_suggest_misspelled,
    bench_search
);
criterion_main!(benches);
