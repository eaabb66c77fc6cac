use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{
    GLYPH_BODY, GLYPH_BORDER_HORIZONTAL, GLYPH_BORDER_VERTICAL, GLYPH_EMPTY, GLYPH_HEAD,
    GLYPH_POINT, Theme,
};
use crate::game::Snapshot;
use crate::snake::Position;
use crate::ui::hud::status_text;
use crate::ui::menu::render_game_over_menu;

/// What occupies one grid cell, in drawing precedence order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Head,
    Point,
    Body,
    BorderHorizontal,
    BorderVertical,
    Empty,
}

impl Cell {
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Head => GLYPH_HEAD,
            Self::Point => GLYPH_POINT,
            Self::Body => GLYPH_BODY,
            Self::BorderHorizontal => GLYPH_BORDER_HORIZONTAL,
            Self::BorderVertical => GLYPH_BORDER_VERTICAL,
            Self::Empty => GLYPH_EMPTY,
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Self::Head => Style::new().fg(theme.head).add_modifier(Modifier::BOLD),
            Self::Point => Style::new().fg(theme.point).add_modifier(Modifier::BOLD),
            Self::Body => Style::new().fg(theme.body),
            Self::BorderHorizontal | Self::BorderVertical => Style::new().fg(theme.border),
            Self::Empty => Style::new(),
        }
    }
}

/// Classifies the cell at `(column, row)`.
#[must_use]
pub fn cell_at(snapshot: &Snapshot, column: u16, row: u16) -> Cell {
    let here = Position {
        x: i32::from(column),
        y: i32::from(row),
    };

    if here == snapshot.cursor {
        Cell::Head
    } else if snapshot.point == Some(here) {
        Cell::Point
    } else if snapshot.body.contains(&here) {
        Cell::Body
    } else if row == 0 || row + 1 == snapshot.grid_height {
        Cell::BorderHorizontal
    } else if column == 0 || column + 1 == snapshot.grid_width {
        Cell::BorderVertical
    } else {
        Cell::Empty
    }
}

/// Renders the bordered grid and status panel as plain text, one string per row.
#[must_use]
pub fn text_grid(snapshot: &Snapshot) -> Vec<String> {
    (0..snapshot.grid_height)
        .map(|row| {
            let mut line: String = (0..snapshot.grid_width)
                .map(|column| cell_at(snapshot, column, row).glyph())
                .collect();
            if let Some(status) = status_text(snapshot, row) {
                line.push_str(&status);
            }
            line
        })
        .collect()
}

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();

    let lines: Vec<Line<'_>> = (0..snapshot.grid_height)
        .map(|row| styled_row(snapshot, row, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if !snapshot.alive {
        render_game_over_menu(frame, area, snapshot, theme);
    }
}

fn styled_row(snapshot: &Snapshot, row: u16, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = (0..snapshot.grid_width)
        .map(|column| {
            let cell = cell_at(snapshot, column, row);
            Span::styled(cell.glyph().to_string(), cell.style(theme))
        })
        .collect();

    if let Some(status) = status_text(snapshot, row) {
        spans.push(Span::styled(status, Style::new().fg(theme.status)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::config::{DEFAULT_GRID, THEME_CLASSIC};
    use crate::game::{GameState, Snapshot};
    use crate::snake::{Body, Position};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::{Cell, cell_at, render, text_grid};

    fn pos(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    fn sample() -> Snapshot {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, 1);
        state.point = Some(pos(5, 3));
        state.body = Body::from_segments(vec![pos(1, 2), pos(2, 2)]);
        state.cursor = crate::snake::Cursor::at(DEFAULT_GRID, pos(1, 3));
        state.score = 2;
        state.highscore = 2;
        state.snapshot()
    }

    #[test]
    fn cells_follow_precedence() {
        let snapshot = sample();

        assert_eq!(cell_at(&snapshot, 1, 3), Cell::Head);
        assert_eq!(cell_at(&snapshot, 5, 3), Cell::Point);
        assert_eq!(cell_at(&snapshot, 2, 2), Cell::Body);
        assert_eq!(cell_at(&snapshot, 0, 0), Cell::BorderHorizontal);
        assert_eq!(cell_at(&snapshot, 19, 9), Cell::BorderHorizontal);
        assert_eq!(cell_at(&snapshot, 0, 4), Cell::BorderVertical);
        assert_eq!(cell_at(&snapshot, 19, 4), Cell::BorderVertical);
        assert_eq!(cell_at(&snapshot, 10, 5), Cell::Empty);
    }

    #[test]
    fn text_grid_draws_border_glyphs_and_status() {
        let lines = text_grid(&sample());

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "-".repeat(20));
        assert_eq!(lines[9], "-".repeat(20));
        assert_eq!(lines[1], format!("|{}| Current score: 2", " ".repeat(18)));
        assert_eq!(lines[2], format!("|=={}| Highscore:     2", " ".repeat(16)));
        assert_eq!(
            lines[3],
            format!("|o   .{}|", " ".repeat(13))
        );
        assert!(lines[4].ends_with("| Cursor pos:    (1, 3)"));
        assert!(lines[5].ends_with("| Point pos:     (5, 3)"));
    }

    #[test]
    fn render_draws_grid_and_game_over_popup() {
        let mut snapshot = sample();
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).expect("test terminal should build");

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME_CLASSIC))
            .expect("draw should succeed");
        let buffer = terminal.backend().buffer().clone();
        assert_eq!(buffer[(1, 3)].symbol(), "o");
        assert_eq!(buffer[(5, 3)].symbol(), ".");

        snapshot.alive = false;
        terminal
            .draw(|frame| render(frame, &snapshot, &THEME_CLASSIC))
            .expect("draw should succeed");
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("game over"));
    }
}
