// Popularity rank type and parsing

use std::num::IntErrorKind;

/// Popularity score of a stored word. Higher is more popular.
///
/// Zero is reserved as the tombstone rank: a word whose rank is 0 is
/// treated as absent by every lookup.
pub type Rank = u32;

/// Error returned when a rank token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The token is not a non-negative integer (e.g. `"abc"`, `"-3"`, `"1.5"`).
    #[error("rank must be a non-negative integer, got {0:?}")]
    NotAnInteger(String),

    /// The token is an integer too large to store.
    #[error("rank {0} is larger than the maximum of {max}", max = Rank::MAX)]
    OutOfRange(String),
}

/// Parse a textual rank token.
///
/// Surrounding whitespace is ignored.
pub fn parse_rank(token: &str) -> Result<Rank, RankError> {
    let token = token.trim();
    token.parse::<Rank>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => RankError::OutOfRange(token.to_string()),
        _ => RankError::NotAnInteger(token.to_string()),
    })
}
