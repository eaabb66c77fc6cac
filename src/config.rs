use std::time::Duration;

use ratatui::style::Color;

/// Playfield dimensions, border cells included.
///
/// Only the cells strictly inside the border are legal for the head, the body
/// and the point. The border itself is never occupied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Smallest interior coordinate on either axis.
    pub const INTERIOR_MIN: i32 = 1;

    /// Largest legal interior x coordinate.
    #[must_use]
    pub fn interior_max_x(self) -> i32 {
        i32::from(self.width) - 2
    }

    /// Largest legal interior y coordinate.
    #[must_use]
    pub fn interior_max_y(self) -> i32 {
        i32::from(self.height) - 2
    }

    /// Returns the number of cells inside the border.
    #[must_use]
    pub fn interior_cells(self) -> usize {
        usize::from(self.width.saturating_sub(2)) * usize::from(self.height.saturating_sub(2))
    }
}

/// Grid used by the shipped binary.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 20,
    height: 10,
};

/// Fixed simulation step interval.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Random draws attempted before point placement scans for free cells.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

pub const GLYPH_HEAD: char = 'o';
pub const GLYPH_POINT: char = '.';
pub const GLYPH_BODY: char = '=';
pub const GLYPH_BORDER_HORIZONTAL: char = '-';
pub const GLYPH_BORDER_VERTICAL: char = '|';
pub const GLYPH_EMPTY: char = ' ';

/// Colours applied to grid cells and popups.
#[derive(Debug)]
pub struct Theme {
    pub head: Color,
    pub body: Color,
    pub point: Color,
    pub border: Color,
    pub status: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

pub const THEME_CLASSIC: Theme = Theme {
    head: Color::White,
    body: Color::Green,
    point: Color::Red,
    border: Color::DarkGray,
    status: Color::White,
    menu_title: Color::Red,
    menu_footer: Color::DarkGray,
};
