//! Menu state and event handling.
//!
//! `MenuApp` owns the candidate list, the filter query being typed, the
//! indices of the candidates currently surviving the filter and the highlighted
//! row. It starts in filter-entry mode with an empty query, so every candidate
//! is visible until the user types.
//!
//! The loop in [`MenuApp::run`] takes its actions from a closure, which lets
//! tests drive the menu with scripted keystrokes on a `TestBackend`.

use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::Action;
use super::rendering::{RenderState, render_ui};
use crate::selector::FilterPredicate;

/// Rows skipped by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// Upper bound on the query length
const MAX_QUERY_LEN: usize = 256;

/// How the menu ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Selected(String),
    Cancelled,
}

pub struct MenuApp {
    candidates: Vec<String>,
    filter: FilterPredicate,
    query: String,
    visible: Vec<usize>,
    selected_idx: usize,
    outcome: Option<MenuOutcome>,
}

impl MenuApp {
    pub fn new(candidates: Vec<String>, filter: FilterPredicate) -> Self {
        let visible = (0..candidates.len()).collect();
        Self { candidates, filter, query: String::new(), visible, selected_idx: 0, outcome: None }
    }

    /// Draw, wait for an action, apply it; until the menu has an outcome
    pub fn run<B, E>(&mut self, terminal: &mut Terminal<B>, mut next_action: E) -> io::Result<MenuOutcome>
    where
        B: Backend,
        E: FnMut() -> io::Result<Action>,
    {
        loop {
            if let Some(outcome) = self.outcome.take() {
                return Ok(outcome);
            }

            terminal.draw(|f| {
                let visible = self.visible_candidates();
                let state = RenderState {
                    query: &self.query,
                    candidates: &visible,
                    selected_idx: self.selected_idx,
                    total_count: self.candidates.len(),
                };
                render_ui(f, &state);
            })?;

            let action = next_action()?;
            self.handle_action(action);
        }
    }

    /// Candidates surviving the current query, in original order
    pub fn visible_candidates(&self) -> Vec<&str> {
        self.visible.iter().map(|&idx| self.candidates[idx].as_str()).collect()
    }

    pub fn selected(&self) -> Option<&str> {
        self.visible.get(self.selected_idx).map(|&idx| self.candidates[idx].as_str())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Cancel => self.outcome = Some(MenuOutcome::Cancelled),
            Action::ClearQuery => {
                if self.query.is_empty() {
                    self.outcome = Some(MenuOutcome::Cancelled);
                } else {
                    self.query.clear();
                    self.refilter();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::Confirm => {
                // Nothing to confirm while the filter hides everything
                if let Some(path) = self.selected() {
                    self.outcome = Some(MenuOutcome::Selected(path.to_string()));
                }
            }
            Action::UpdateQuery(c) => self.update_query(c),
            Action::DeleteChar => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Action::DeleteWord => self.delete_word(),
            Action::ClearLine => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.refilter();
                }
            }
            Action::Redraw | Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);
    }

    fn update_query(&mut self, c: char) {
        if self.query.len() < MAX_QUERY_LEN {
            self.query.push(c);
            self.refilter();
        }
    }

    /// Drop trailing whitespace, then the last word
    fn delete_word(&mut self) {
        let trimmed_len = self.query.trim_end().len();
        let word_start = self.query[..trimmed_len]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        if word_start != self.query.len() {
            self.query.truncate(word_start);
            self.refilter();
        }
    }

    /// Recompute survivors and reset the highlight to the first one
    fn refilter(&mut self) {
        let filter = self.filter;
        let query = self.query.as_str();
        self.visible = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| filter(query, candidate))
            .map(|(idx, _)| idx)
            .collect();
        self.selected_idx = 0;
    }
}
