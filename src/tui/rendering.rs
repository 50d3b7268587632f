use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::layout::MenuLayout;
use crate::utils::{format_path_with_tilde, sanitize_for_display};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Snapshot of menu state needed for one frame
pub struct RenderState<'a> {
    pub query: &'a str,
    pub candidates: &'a [&'a str],
    pub selected_idx: usize,
    pub total_count: usize,
}

/// Render the entire menu
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = MenuLayout::new(frame.area());

    render_prompt(frame, layout.prompt_area, state.query);
    render_candidates(frame, layout.results_area, state.candidates, state.selected_idx);
    render_status_bar(frame, layout.status_area, state);
}

fn render_prompt(frame: &mut Frame, area: Rect, query: &str) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw(sanitize_for_display(query)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    // Cursor after the query text
    let cursor_x = area.x.saturating_add(2).saturating_add(query.chars().count() as u16);
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

fn render_candidates(frame: &mut Frame, area: Rect, candidates: &[&str], selected_idx: usize) {
    let items: Vec<ListItem> = candidates
        .iter()
        .map(|path| {
            // Cache entries are untrusted text; never let them drive the terminal
            let display = sanitize_for_display(&format_path_with_tilde(path)).into_owned();
            ListItem::new(display).style(Style::default().fg(MUTED))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Directories "),
        )
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if !candidates.is_empty() {
        list_state.select(Some(selected_idx.min(candidates.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let visible = state.candidates.len();
    let status_text = if visible == 0 {
        format!(" 0/{} | Backspace: edit | Esc: clear | Ctrl+C: cancel ", state.total_count)
    } else {
        format!(
            " {}/{} | entry {}/{} | !word: exclude | Enter: select | Esc: clear | Ctrl+C: cancel ",
            visible,
            state.total_count,
            state.selected_idx.min(visible - 1) + 1,
            visible
        )
    };

    let paragraph = Paragraph::new(status_text).style(Style::default().fg(BRIGHT).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}
