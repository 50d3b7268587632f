//! Data models shared by the matcher, selector and CLI.
//!
//! - [`Query`] / [`Mode`] - what the user asked for
//! - [`MatchSet`] - ordered, non-empty survivors of a match
//! - [`Selection`] - the resolved outcome printed by the CLI

pub mod match_set;
pub mod query;

pub use match_set::{MatchSet, Selection};
pub use query::{Mode, Query};
