// Prefix search

use spelling_core::RankedWord;
use spelling_trie::TrieStore;

/// Words reachable from `prefix` within `depth` characters, best rank first.
///
/// `prefix` must already be canonical. The prefix itself is included when it
/// is a live word. An unknown prefix yields an empty list. Ties keep trie
/// traversal order.
pub fn search(store: &TrieStore, prefix: &str, depth: usize) -> Vec<RankedWord> {
    let Some(start) = store.find(prefix) else {
        return Vec::new();
    };

    let mut results = store.collect_words(start, prefix, depth);
    if let Some(rank) = store.node(start).word_rank() {
        results.push(RankedWord::new(prefix, rank));
    }

    results.sort_by(|a, b| b.rank.cmp(&a.rank));
    results
}
