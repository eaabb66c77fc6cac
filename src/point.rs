use log::warn;
use rand::Rng;

use crate::config::{GridSize, MAX_PLACEMENT_ATTEMPTS};
use crate::snake::{Body, Position};

/// Picks a random interior cell that is neither a body segment nor `excluded`.
///
/// Draws uniformly at random up to [`MAX_PLACEMENT_ATTEMPTS`] times, then falls
/// back to choosing among the remaining free cells. Returns `None` only when
/// every interior cell is taken.
#[must_use]
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    body: &Body,
    excluded: Position,
) -> Option<Position> {
    if grid.interior_cells() == 0 {
        return None;
    }

    let is_free = |position: Position| position != excluded && !body.occupies(position);

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = random_interior(rng, grid);
        if is_free(candidate) {
            return Some(candidate);
        }
    }

    warn!("point placement exhausted {MAX_PLACEMENT_ATTEMPTS} random draws, scanning free cells");
    free_cells(grid, is_free).and_then(|cells| {
        let index = rng.gen_range(0..cells.len());
        cells.get(index).copied()
    })
}

fn random_interior<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Position {
    Position {
        x: rng.gen_range(GridSize::INTERIOR_MIN..=grid.interior_max_x()),
        y: rng.gen_range(GridSize::INTERIOR_MIN..=grid.interior_max_y()),
    }
}

fn free_cells(grid: GridSize, is_free: impl Fn(Position) -> bool) -> Option<Vec<Position>> {
    let mut cells = Vec::new();

    for y in GridSize::INTERIOR_MIN..=grid.interior_max_y() {
        for x in GridSize::INTERIOR_MIN..=grid.interior_max_x() {
            let position = Position { x, y };
            if is_free(position) {
                cells.push(position);
            }
        }
    }

    (!cells.is_empty()).then_some(cells)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{DEFAULT_GRID, GridSize};
    use crate::snake::{Body, Position};

    use super::place;

    #[test]
    fn placement_never_overlaps_body_or_cursor() {
        let mut rng = StdRng::seed_from_u64(7);
        let body = Body::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
        ]);
        let cursor = Position { x: 4, y: 1 };

        for _ in 0..500 {
            let point = place(&mut rng, DEFAULT_GRID, &body, cursor).expect("grid has free cells");
            assert!(!body.occupies(point));
            assert_ne!(point, cursor);
            assert!(point.is_interior(DEFAULT_GRID));
        }
    }

    #[test]
    fn placement_finds_the_last_free_cell() {
        let grid = GridSize {
            width: 5,
            height: 4,
        };
        // Interior is 3x2; leave only (3, 2) free.
        let body = Body::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
            Position { x: 1, y: 2 },
        ]);
        let cursor = Position { x: 2, y: 2 };
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            assert_eq!(
                place(&mut rng, grid, &body, cursor),
                Some(Position { x: 3, y: 2 })
            );
        }
    }

    #[test]
    fn placement_on_full_grid_returns_none() {
        let grid = GridSize {
            width: 4,
            height: 3,
        };
        let body = Body::from_segments(vec![Position { x: 1, y: 1 }]);
        let cursor = Position { x: 2, y: 1 };
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place(&mut rng, grid, &body, cursor), None);
    }
}
