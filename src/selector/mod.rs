//! Turns a [`MatchSet`] into the one thing the CLI prints.
//!
//! A single survivor is emitted as is. Several survivors are either listed for
//! the caller to disambiguate (by index or by eye) or handed to a [`Chooser`],
//! the interactive menu contract. The menu is only used when the terminal can
//! host it; otherwise the list comes back as [`Selection::Ambiguous`] so the
//! shell wrapper can tell "here are some options" from "go here".

pub mod terminal;

pub use terminal::TerminalSupport;

use crate::error::LcdError;
use crate::models::{MatchSet, Selection};

/// Filter used by a chooser: `(query input, candidate) -> keep?`
pub type FilterPredicate = fn(&str, &str) -> bool;

/// Picks one candidate out of several
///
/// Implemented by the terminal menu in [`crate::tui`]; tests substitute a
/// headless double.
pub trait Chooser {
    /// # Errors
    ///
    /// - [`LcdError::Cancelled`] when the user aborts the selection
    /// - [`LcdError::Terminal`] when the menu cannot run on this terminal
    fn choose_one(&mut self, candidates: &[String], filter: FilterPredicate)
    -> Result<String, LcdError>;
}

/// How ambiguous match sets are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    List,
    Interactive,
}

impl SelectMode {
    /// Interactive only when asked for and the terminal can host a menu
    pub fn for_terminal(want_menu: bool, support: TerminalSupport) -> Self {
        if want_menu && support.is_interactive() { SelectMode::Interactive } else { SelectMode::List }
    }
}

/// Resolve a match set into a [`Selection`]
///
/// The chooser is consulted only for ambiguous sets in interactive mode.
pub fn select(
    matches: MatchSet,
    mode: SelectMode,
    chooser: &mut dyn Chooser,
    filter: FilterPredicate,
) -> Result<Selection, LcdError> {
    if !matches.is_ambiguous() {
        return Ok(Selection::Single(matches.first().to_string()));
    }

    match mode {
        SelectMode::List => Ok(Selection::Ambiguous(matches.into_entries())),
        SelectMode::Interactive => {
            let chosen = chooser.choose_one(matches.entries(), filter)?;
            Ok(Selection::Single(chosen))
        }
    }
}
