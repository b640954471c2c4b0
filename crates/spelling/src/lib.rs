//! Spelling lookup, correction suggestions and prefix search over a ranked
//! word list.
//!
//! The entry point is [`Dictionary`]: insert words with a popularity rank,
//! look them up (getting ranked corrections for misses) and search by
//! prefix.
//!
//! ```
//! use spelling::{Dictionary, LookupOptions};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("hell", Some(400)).unwrap();
//! dict.insert("help", Some(200)).unwrap();
//!
//! let result = dict.lookup("hel", &LookupOptions::default());
//! assert!(!result.found);
//! assert_eq!(result.suggestion_words(), vec!["hell", "help"]);
//! ```
//!
//! # Architecture
//!
//! - [`dictionary`] -- the façade that canonicalizes input and owns the trie
//! - [`suggestion`] -- edit generators and the two-round suggestion strategy
//! - [`search`] -- depth-bounded prefix search
//! - [`seed`] -- building dictionaries from text, word lists and files
//! - [`lexicon`] -- the lookup seam the generators check candidates against

pub mod dictionary;
pub mod error;
pub mod lexicon;
pub mod options;
pub mod search;
pub mod seed;
pub mod suggestion;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, SeedError};
pub use options::{LookupOptions, SearchOptions};
pub use spelling_core::{LookupResult, Rank, RankedWord};
