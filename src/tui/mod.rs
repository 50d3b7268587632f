// Terminal menu for picking one of several matching directories
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::io;

pub use app::{MenuApp, MenuOutcome};
use events::read_action;
use terminal::TerminalManager;
use tracing::debug;

use crate::error::LcdError;
use crate::selector::{Chooser, FilterPredicate};

/// [`Chooser`] drawing a full-screen menu on stderr
#[derive(Debug, Default)]
pub struct TerminalMenu;

impl Chooser for TerminalMenu {
    fn choose_one(
        &mut self,
        candidates: &[String],
        filter: FilterPredicate,
    ) -> Result<String, LcdError> {
        debug!(count = candidates.len(), "opening selection menu");

        let mut manager = TerminalManager::new().map_err(LcdError::Terminal)?;
        let mut app = MenuApp::new(candidates.to_vec(), filter);
        let outcome = app.run(manager.terminal_mut(), read_action);
        manager.restore().map_err(LcdError::Terminal)?;

        finish(outcome)
    }
}

/// Map how the menu loop ended onto the chooser contract
fn finish(outcome: io::Result<MenuOutcome>) -> Result<String, LcdError> {
    match outcome.map_err(LcdError::Terminal)? {
        MenuOutcome::Selected(path) => Ok(path),
        MenuOutcome::Cancelled => Err(LcdError::Cancelled),
    }
}
