// Word lookup seam used by the suggestion generators

use spelling_core::Rank;
use spelling_trie::TrieStore;

/// Anything that can tell whether a word is stored, and with which rank.
///
/// Suggestion generators validate every candidate through this trait so
/// they can be exercised against a small in-memory word list in tests.
pub trait Lexicon {
    /// The rank of `word` if it is a live stored word.
    ///
    /// `word` is already canonical. Tombstoned words must return `None`.
    fn rank_of(&self, word: &str) -> Option<Rank>;
}

impl Lexicon for TrieStore {
    fn rank_of(&self, word: &str) -> Option<Rank> {
        self.rank(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trie_store_reports_live_words_only() {
        let mut store = TrieStore::new();
        store.set_rank("hello", 3).unwrap();
        store.set_rank("help", 0).unwrap();
        assert_eq!(store.rank_of("hello"), Some(3));
        assert_eq!(store.rank_of("help"), None);
        assert_eq!(store.rank_of("hel"), None);
    }
}
