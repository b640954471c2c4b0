// Lookup result records

use crate::rank::Rank;

// ---------------------------------------------------------------------------
// RankedWord
// ---------------------------------------------------------------------------

/// A stored word together with its rank.
///
/// Used for suggestions and prefix search results. Every `RankedWord`
/// handed out by the engine is a word that is currently found in the
/// dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedWord {
    /// The canonical word.
    pub word: String,
    /// The word's rank at the time it was collected.
    pub rank: Rank,
}

impl RankedWord {
    /// Create a new ranked word.
    pub fn new(word: impl Into<String>, rank: Rank) -> Self {
        Self {
            word: word.into(),
            rank,
        }
    }
}

// ---------------------------------------------------------------------------
// LookupResult
// ---------------------------------------------------------------------------

/// Outcome of looking up one word.
///
/// - found: `rank` is `Some`, `suggestions` is `None`
/// - missed with suggestions requested: `rank` is `None`, `suggestions` is
///   `Some` (possibly empty)
/// - missed without suggestions: both are `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Whether the word is in the dictionary (or is a number).
    pub found: bool,
    /// The canonical form of the queried word.
    pub word: String,
    /// Rank of the found word. Numbers are found with rank 0.
    pub rank: Option<Rank>,
    /// Correction candidates, best first.
    pub suggestions: Option<Vec<RankedWord>>,
}

impl LookupResult {
    /// A hit on a stored word (or a number, with rank 0).
    pub fn found(word: impl Into<String>, rank: Rank) -> Self {
        Self {
            found: true,
            word: word.into(),
            rank: Some(rank),
            suggestions: None,
        }
    }

    /// A miss without suggestions.
    pub fn not_found(word: impl Into<String>) -> Self {
        Self {
            found: false,
            word: word.into(),
            rank: None,
            suggestions: None,
        }
    }

    /// A miss carrying correction candidates.
    pub fn with_suggestions(word: impl Into<String>, suggestions: Vec<RankedWord>) -> Self {
        Self {
            found: false,
            word: word.into(),
            rank: None,
            suggestions: Some(suggestions),
        }
    }

    /// The suggested words in order, or an empty list if there are none.
    pub fn suggestion_words(&self) -> Vec<&str> {
        self.suggestions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| s.word.as_str())
            .collect()
    }
}
