//! Streaming access to the persisted path cache.
//!
//! The cache is a newline-delimited list of absolute directory paths written
//! by an external indexer. It is read-only here and treated as a hint: every
//! entry is re-validated against the filesystem before it is surfaced.

pub mod reader;

pub use reader::{CacheReader, open_cache};
