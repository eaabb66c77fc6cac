use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};
use crate::point;
use crate::snake::{Body, Cursor, Position};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum EndReason {
    SelfCollision,
    /// No free interior cell was left for the next point.
    BoardFilled,
}

/// Events delivered to the state machine by the driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Tick,
    Turn(Direction),
    Quit,
}

/// Whether the driver should keep scheduling ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Read-only view of a game for rendering and diagnostics.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub cursor: Position,
    pub body: Vec<Position>,
    pub point: Option<Position>,
    pub score: u32,
    pub highscore: u32,
    pub alive: bool,
    pub end_reason: Option<EndReason>,
    pub grid_width: u16,
    pub grid_height: u16,
}

/// Complete mutable game state for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub cursor: Cursor,
    pub direction: Direction,
    pub body: Body,
    /// `None` once the board is filled and no free cell is left.
    pub point: Option<Position>,
    pub score: u32,
    pub highscore: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub tick_count: u64,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a game seeded from system entropy.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, StdRng::from_entropy(), 0)
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed), 0)
    }

    fn with_rng(grid: GridSize, mut rng: StdRng, highscore: u32) -> Self {
        let cursor = Cursor::new(grid);
        let body = Body::new();
        let point = point::place(&mut rng, grid, &body, cursor.position());

        let mut state = Self {
            cursor,
            direction: Direction::Down,
            body,
            point,
            score: 0,
            highscore,
            status: GameStatus::Running,
            end_reason: None,
            tick_count: 0,
            grid,
            rng,
        };

        if point.is_none() {
            state.end(EndReason::BoardFilled);
        }

        state
    }

    /// Starts a fresh game on the same grid, keeping the session highscore.
    #[must_use]
    pub fn restart(self) -> Self {
        Self::with_rng(self.grid, self.rng, self.highscore)
    }

    /// Applies one driver event and reports whether ticking should continue.
    #[must_use]
    pub fn handle_event(mut self, event: GameEvent) -> (Self, Flow) {
        match event {
            GameEvent::Quit => return (self, Flow::Stop),
            GameEvent::Tick => self.tick(),
            GameEvent::Turn(direction) => self.turn(direction),
        }

        let flow = if self.is_running() {
            Flow::Continue
        } else {
            Flow::Stop
        };
        (self, flow)
    }

    /// Advances simulation by one step.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;

        let vacated_head = self.cursor.position();
        self.cursor.step(self.direction);
        let dropped_tail = self.body.shift(vacated_head);

        let head = self.cursor.position();
        if self.point == Some(head) {
            self.score += 1;
            self.highscore = self.highscore.max(self.score);
            self.body.grow(dropped_tail.unwrap_or(vacated_head));

            self.point = point::place(&mut self.rng, self.grid, &self.body, head);
            let Some(next_point) = self.point else {
                self.end(EndReason::BoardFilled);
                return;
            };
            debug!(
                "point consumed at ({}, {}), score {}, next point ({}, {})",
                head.x, head.y, self.score, next_point.x, next_point.y
            );
        }

        if self.body.occupies(head) {
            self.end(EndReason::SelfCollision);
        }
    }

    /// Changes direction unless the turn is a direct reversal.
    pub fn turn(&mut self, direction: Direction) {
        if self.status == GameStatus::Running
            && direction_change_is_valid(self.direction, direction)
        {
            self.direction = direction;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor.position(),
            body: self.body.segments().copied().collect(),
            point: self.point,
            score: self.score,
            highscore: self.highscore,
            alive: self.is_running(),
            end_reason: self.end_reason,
            grid_width: self.grid.width,
            grid_height: self.grid.height,
        }
    }

    fn end(&mut self, reason: EndReason) {
        info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count, self.score
        );
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
    }
}
