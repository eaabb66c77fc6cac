use crate::game::Snapshot;

/// Returns the status panel text shown to the right of grid row `row`.
#[must_use]
pub fn status_text(snapshot: &Snapshot, row: u16) -> Option<String> {
    match row {
        1 => Some(format!(" Current score: {}", snapshot.score)),
        2 => Some(format!(" Highscore:     {}", snapshot.highscore)),
        4 => Some(format!(
            " Cursor pos:    ({}, {})",
            snapshot.cursor.x, snapshot.cursor.y
        )),
        5 => Some(match snapshot.point {
            Some(point) => format!(" Point pos:     ({}, {})", point.x, point.y),
            None => " Point pos:     -".to_owned(),
        }),
        _ => None,
    }
}
