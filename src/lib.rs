//! lcd - jump to a directory by name using a pre-scanned path cache
//!
//! The cache is a plain list of absolute directory paths, one per line, kept
//! up to date by a separate indexer. This library reads it and answers:
//!
//! - which cached directories end with a given name or trailing path segments
//! - which one is the N-th of those
//! - which next path segments complete a partial fragment
//! - which single directory the user wants, via an interactive menu
//!
//! Every candidate is re-checked against the live filesystem before it is
//! returned; entries that were deleted or replaced since the cache was written
//! are skipped silently.
//!
//! # Example
//!
//! ```no_run
//! use lcd::cache::open_cache;
//! use lcd::matcher::{FsProbe, match_word};
//! use std::path::Path;
//!
//! let cache = open_cache(Path::new("/home/alice/.lcd/cache"))?;
//! let matches = match_word("lcd", cache, &FsProbe)?;
//! for path in matches.entries() {
//!     println!("{}", path);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod selector;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use error::LcdError;
pub use matcher::{complete, match_at, match_word};
pub use models::{MatchSet, Selection};
pub use utils::format_path_with_tilde;
