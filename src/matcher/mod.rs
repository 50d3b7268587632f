//! Suffix matching and next-segment completion over the path cache.
//!
//! Every operation here funnels entries through [`live::live_survivors`], so
//! the stale-entry policy lives in one place: an entry is surfaced only after
//! a fresh directory check, and entries failing it are dropped silently.

pub mod completion;
pub mod live;
pub mod matching;

pub use completion::{CompletionOptions, complete};
pub use live::{DirectoryProbe, FsProbe, live_survivors, strip_trailing_separator};
pub use matching::{match_at, match_word};
