// Suggestion bookkeeping: per-word cost budget and the merged output list

use hashbrown::HashSet;
use spelling_core::RankedWord;

// ---------------------------------------------------------------------------
// SuggestionStatus
// ---------------------------------------------------------------------------

/// State of one edit pass over a single word.
///
/// Every candidate checked against the lexicon costs one unit via
/// [`charge`](Self::charge). Once `current_cost` reaches `max_cost` the
/// generators stop producing candidates.
///
/// Found candidates are kept in generation order, duplicates included;
/// deduplication happens later in [`SuggestionList`].
pub struct SuggestionStatus<'a> {
    /// The word being edited.
    word: &'a [char],
    max_cost: usize,
    current_cost: usize,
    found: Vec<RankedWord>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], max_cost: usize) -> Self {
        Self {
            word,
            max_cost,
            current_cost: 0,
            found: Vec::new(),
        }
    }

    /// Returns `true` once the cost budget is spent.
    pub fn should_abort(&self) -> bool {
        self.current_cost >= self.max_cost
    }

    /// Account for one candidate check.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    /// Record a candidate that the lexicon accepted.
    pub fn add_found(&mut self, candidate: RankedWord) {
        self.found.push(candidate);
    }

    pub fn cost(&self) -> usize {
        self.current_cost
    }

    /// The word being edited. The slice outlives the borrow of `self`, so
    /// generators can read it while charging the budget.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    /// Consume the status and return the accepted candidates.
    pub fn into_found(self) -> Vec<RankedWord> {
        self.found
    }
}

// ---------------------------------------------------------------------------
// SuggestionList
// ---------------------------------------------------------------------------

/// Bounded, duplicate-free list of final suggestions.
///
/// Words are accepted in the order they are offered; a word already in the
/// list is ignored, and nothing is accepted once `limit` words are held.
#[derive(Debug)]
pub struct SuggestionList {
    limit: usize,
    seen: HashSet<String>,
    words: Vec<RankedWord>,
}

impl SuggestionList {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::with_capacity(limit),
            words: Vec::with_capacity(limit),
        }
    }

    /// Offer a candidate. Returns `true` if it was added.
    pub fn add(&mut self, candidate: RankedWord) -> bool {
        if self.is_full() || self.seen.contains(candidate.word.as_str()) {
            return false;
        }
        self.seen.insert(candidate.word.clone());
        self.words.push(candidate);
        true
    }

    /// Offer candidates in order until the list is full.
    pub fn extend(&mut self, candidates: impl IntoIterator<Item = RankedWord>) {
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            self.add(candidate);
        }
    }

    pub fn is_full(&self) -> bool {
        self.words.len() >= self.limit
    }

    pub fn into_words(self) -> Vec<RankedWord> {
        self.words
    }
}
