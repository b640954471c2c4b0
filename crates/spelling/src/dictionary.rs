// Dictionary: the public face of the engine.
//
// Owns the trie store and the suggestion strategy. Every entry point
// canonicalizes its input (trim, lower-case) before touching the store, so
// the store itself only ever sees canonical words.
//
// Numbers are never stored: inserting one is a no-op and looking one up is
// always a hit with rank 0.

use spelling_core::normalize::{canonicalize, is_numeric};
use spelling_core::rank::parse_rank;
use spelling_core::{LookupResult, Rank, RankedWord};
use spelling_trie::TrieStore;
use tracing::trace;

use crate::error::DictionaryError;
use crate::options::{LookupOptions, SearchOptions};
use crate::search;
use crate::suggestion::SuggestionStrategy;

/// A ranked word list with lookup, correction suggestions and prefix search.
///
/// Mutators take `&mut self` and readers `&self`; a `Dictionary` is plain
/// owned data and can be shared across threads behind the host's own lock.
pub struct Dictionary {
    store: TrieStore,
    strategy: SuggestionStrategy,

    // -- Defaults for `check` / `complete` --
    lookup_options: LookupOptions,
    search_options: SearchOptions,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            store: TrieStore::new(),
            strategy: SuggestionStrategy::default(),
            lookup_options: LookupOptions::default(),
            search_options: SearchOptions::default(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add `word`, or update its rank.
    ///
    /// With `Some(rank)` the stored rank becomes exactly `rank` (0 removes the
    /// word). With `None` the stored rank goes up by one, starting from 0 for
    /// new or removed words.
    pub fn insert(&mut self, word: &str, rank: Option<Rank>) -> Result<&mut Self, DictionaryError> {
        let word = canonicalize(word);
        if is_numeric(&word) {
            trace!(%word, "not storing numeric word");
            return Ok(self);
        }
        match rank {
            Some(rank) => {
                self.store.set_rank(&word, rank)?;
            }
            None => {
                self.store.increment_rank(&word)?;
            }
        }
        Ok(self)
    }

    /// [`insert`](Self::insert) for untyped input, such as tokens read from a
    /// word list or values handed over by a script host.
    pub fn insert_raw(
        &mut self,
        word: Option<&str>,
        rank: Option<&str>,
    ) -> Result<&mut Self, DictionaryError> {
        let word = word.ok_or(DictionaryError::InvalidWord)?;
        let rank = rank.map(parse_rank).transpose()?;
        self.insert(word, rank)
    }

    /// Remove `word` if it is currently stored. Unknown words are ignored.
    pub fn remove(&mut self, word: &str) -> &mut Self {
        let word = canonicalize(word);
        if self.store.tombstone(&word) {
            trace!(%word, "removed");
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up one word, generating suggestions on a miss if `options`
    /// asks for them.
    pub fn lookup(&self, word: &str, options: &LookupOptions) -> LookupResult {
        let word = canonicalize(word);
        if is_numeric(&word) {
            return LookupResult::found(word, 0);
        }
        if let Some(rank) = self.store.rank(&word) {
            return LookupResult::found(word, rank);
        }
        if !options.suggest {
            return LookupResult::not_found(word);
        }
        let suggestions = self.strategy.suggest(
            &self.store,
            &word,
            options.effective_limit(),
            options.max_cost,
        );
        LookupResult::with_suggestions(word, suggestions)
    }

    /// Look up each word in turn. The output has one result per input, in
    /// input order.
    pub fn lookup_all<S: AsRef<str>>(&self, words: &[S], options: &LookupOptions) -> Vec<LookupResult> {
        words
            .iter()
            .map(|word| self.lookup(word.as_ref(), options))
            .collect()
    }

    /// Words starting with `prefix`, at most `options.depth` characters
    /// longer than it, best rank first.
    ///
    /// The prefix itself is listed only when it is a stored word; a numeric
    /// or empty prefix is not reported as a rank-0 match.
    pub fn search(&self, prefix: &str, options: &SearchOptions) -> Vec<RankedWord> {
        search::search(&self.store, &canonicalize(prefix), options.depth)
    }

    /// [`lookup`](Self::lookup) with this dictionary's default options.
    pub fn check(&self, word: &str) -> LookupResult {
        self.lookup(word, &self.lookup_options)
    }

    /// [`search`](Self::search) with this dictionary's default options.
    pub fn complete(&self, prefix: &str) -> Vec<RankedWord> {
        self.search(prefix, &self.search_options)
    }

    /// The rank of `word` if it is stored.
    pub fn rank(&self, word: &str) -> Option<Rank> {
        self.store.rank(&canonicalize(word))
    }

    /// Returns `true` if `word` is stored. Numbers are not stored.
    pub fn contains(&self, word: &str) -> bool {
        self.rank(word).is_some()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.store.word_count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of trie nodes, including those of removed words.
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    // =========================================================================
    // Default options
    // =========================================================================

    pub fn set_suggest(&mut self, value: bool) {
        self.lookup_options.suggest = value;
    }

    /// 0 restores the default of 10.
    pub fn set_suggestions_limit(&mut self, value: usize) {
        self.lookup_options.suggestions_limit = value;
    }

    pub fn set_max_cost(&mut self, value: usize) {
        self.lookup_options.max_cost = value;
    }

    pub fn set_search_depth(&mut self, value: usize) {
        self.search_options.depth = value;
    }

    pub fn lookup_options(&self) -> &LookupOptions {
        &self.lookup_options
    }

    pub fn search_options(&self) -> &SearchOptions {
        &self.search_options
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::RankError;

    #[test]
    fn insert_is_chainable() {
        let mut dict = Dictionary::new();
        dict.insert("yell", Some(100))
            .unwrap()
            .insert("help", Some(200))
            .unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn insert_canonicalizes() {
        let mut dict = Dictionary::new();
        dict.insert("  Hello ", Some(5)).unwrap();
        assert_eq!(dict.rank("hello"), Some(5));
        assert_eq!(dict.rank("HELLO"), Some(5));
    }

    #[test]
    fn numbers_are_not_stored() {
        let mut dict = Dictionary::new();
        dict.insert("42", Some(7)).unwrap();
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.node_count(), 1);
        let r = dict.check("42");
        assert!(r.found);
        assert_eq!(r.rank, Some(0));
    }

    #[test]
    fn insert_raw_requires_word() {
        let mut dict = Dictionary::new();
        let err = dict.insert_raw(None, Some("3")).err();
        assert_eq!(err, Some(DictionaryError::InvalidWord));
    }

    #[test]
    fn insert_raw_rejects_bad_rank() {
        let mut dict = Dictionary::new();
        let err = dict.insert_raw(Some("hello"), Some("lots")).err();
        assert_eq!(
            err,
            Some(DictionaryError::InvalidRank(RankError::NotAnInteger(
                "lots".to_string()
            )))
        );
        assert!(dict.is_empty());
    }

    #[test]
    fn insert_raw_without_rank_increments() {
        let mut dict = Dictionary::new();
        dict.insert_raw(Some("hello"), None).unwrap();
        dict.insert_raw(Some("hello"), None).unwrap();
        dict.insert_raw(Some("help"), Some("9")).unwrap();
        assert_eq!(dict.rank("hello"), Some(2));
        assert_eq!(dict.rank("help"), Some(9));
    }

    #[test]
    fn remove_unknown_word_does_not_grow_trie() {
        let mut dict = Dictionary::new();
        dict.insert("hello", None).unwrap();
        let nodes = dict.node_count();
        dict.remove("help").remove("hel");
        assert_eq!(dict.node_count(), nodes);
        assert!(dict.contains("hello"));
    }

    #[test]
    fn default_options_are_adjustable() {
        let mut dict = Dictionary::new();
        dict.insert("hello", None).unwrap();
        dict.set_suggest(false);
        assert_eq!(dict.check("hell").suggestions, None);
        dict.set_suggest(true);
        assert_eq!(dict.check("hell").suggestion_words(), vec!["hello"]);

        dict.insert("he", Some(3)).unwrap();
        dict.set_search_depth(1);
        assert_eq!(dict.complete("he"), vec![RankedWord::new("he", 3)]);
        dict.set_search_depth(3);
        assert_eq!(dict.complete("he").len(), 2);
    }

    #[test]
    fn version_is_set() {
        assert!(!Dictionary::get_version().is_empty());
    }
}
