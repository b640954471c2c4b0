//! Shared types and utilities for the spelling engine.
//!
//! - [`normalize`] -- canonical word form and numeric detection
//! - [`alphabet`] -- the fixed character set used to generate edits
//! - [`rank`] -- the popularity rank type and its parser
//! - [`result`] -- lookup result records shared by every front end

pub mod alphabet;
pub mod normalize;
pub mod rank;
pub mod result;

pub use rank::{Rank, RankError};
pub use result::{LookupResult, RankedWord};
