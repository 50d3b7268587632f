use std::io;

use thiserror::Error;

/// Errors surfaced by the matching, completion and selection layers.
///
/// Stale cache entries never show up here: they are dropped silently by
/// [`crate::matcher::live::live_survivors`].
#[derive(Debug, Error)]
pub enum LcdError {
    /// No surviving directory for `word`, or none at the requested 1-based position.
    #[error("no directory matching '{word}'{}", position_suffix(.position))]
    NotFound { word: String, position: Option<usize> },

    /// The user aborted the interactive menu.
    #[error("selection cancelled")]
    Cancelled,

    #[error("failed to read cache: {0}")]
    Io(#[from] io::Error),

    /// Setting up, driving or restoring the menu terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

impl LcdError {
    pub fn not_found(word: impl Into<String>) -> Self {
        Self::NotFound { word: word.into(), position: None }
    }

    pub fn not_found_at(word: impl Into<String>, position: usize) -> Self {
        Self::NotFound { word: word.into(), position: Some(position) }
    }
}

fn position_suffix(position: &Option<usize>) -> String {
    match position {
        Some(n) => format!(" at position {}", n),
        None => String::new(),
    }
}
