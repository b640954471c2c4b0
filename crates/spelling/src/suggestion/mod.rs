// Spelling correction candidates
//
// Architecture:
//   - `generators`: one edit class each (EditGenerator trait)
//   - `status`: per-pass cost budget and the deduplicated output list
//   - `strategy`: runs the generators for one or two rounds and merges

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::EditGenerator;
pub use status::{SuggestionList, SuggestionStatus};
pub use strategy::SuggestionStrategy;
