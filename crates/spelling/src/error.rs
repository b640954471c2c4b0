// Dictionary error types

use spelling_core::RankError;
use spelling_trie::StoreError;

/// Errors returned by dictionary mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// No word was supplied.
    #[error("a word is required")]
    InvalidWord,

    /// The rank token could not be parsed.
    #[error("invalid rank: {0}")]
    InvalidRank(#[from] RankError),

    /// The trie could not grow.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned while seeding a dictionary from text or files.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// A word-list line could not be inserted.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: DictionaryError,
    },

    /// A word/rank blob ended on a word without its rank.
    #[error("word {word:?} has no rank")]
    MissingRank { word: String },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
