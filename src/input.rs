use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events produced by the keyboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

impl GameInput {
    /// Maps a key event to a game input. Releases, repeats and unbound keys map to `None`.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Self::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(Self::Direction(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(Self::Direction(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(Self::Direction(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(Self::Direction(Direction::Right)),
            KeyCode::Enter => Some(Self::Restart),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Reads keyboard input from the terminal.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a terminal event and maps it to a game input.
    ///
    /// Returns `Ok(None)` on timeout and for events that carry no game meaning.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(GameInput::from_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_rejected() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('d'), Direction::Right),
        ];

        for (code, direction) in cases {
            assert_eq!(
                GameInput::from_key_event(press(code)),
                Some(GameInput::Direction(direction))
            );
        }
    }

    #[test]
    fn quit_keys_map_to_quit() {
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Char('q'))),
            Some(GameInput::Quit)
        );
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Esc)),
            Some(GameInput::Quit)
        );
        assert_eq!(
            GameInput::from_key_event(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unbound_and_released_keys_are_ignored() {
        assert_eq!(GameInput::from_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(GameInput::from_key_event(press(KeyCode::Tab)), None);

        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(GameInput::from_key_event(release), None);
    }
}
