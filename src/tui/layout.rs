use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Menu layout configuration
pub struct MenuLayout {
    pub prompt_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl MenuLayout {
    /// Create stacked layout:
    /// - Prompt: top row
    /// - Candidate list: everything in between
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Prompt (1 row)
                Constraint::Min(1),    // Candidates (at least 1 row)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        Self { prompt_area: chunks[0], results_area: chunks[1], status_area: chunks[2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = MenuLayout::new(area);

        assert_eq!(layout.prompt_area.height, 1);
        assert_eq!(layout.prompt_area.y, 0);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        assert_eq!(layout.results_area.height, 28);
        assert_eq!(layout.results_area.width, 100);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 80, 3);
        let layout = MenuLayout::new(area);

        assert_eq!(layout.prompt_area.height, 1);
        assert_eq!(layout.results_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
    }
}
