//! Single-step movement geometry.
//!
//! Every move an agent makes lands inside the 3x3 block centred on it, so
//! all helpers here work on that neighbourhood and on plain distance.

use gridlife_data::{Located, Position};

/// Per-axis offsets of one step. Staying put is `(0, 0)`.
const STEP: [i32; 3] = [-1, 0, 1];

/// The nine cells reachable in one step, self included.
///
/// Order is fixed (x offset outer, y offset inner) so that tie-breaking
/// and seeded runs stay reproducible.
#[must_use]
pub fn neighborhood(center: Position) -> [Position; 9] {
    let mut cells = [center; 9];
    let mut i = 0;
    for dx in STEP {
        for dy in STEP {
            cells[i] = center.offset(dx, dy);
            i += 1;
        }
    }
    cells
}

/// Strict square containment: cells exactly `radius` away are outside.
#[must_use]
pub fn is_in_range(center: Position, radius: f64, candidate: Position) -> bool {
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));
    let (px, py) = (f64::from(candidate.x), f64::from(candidate.y));
    px < cx + radius && px > cx - radius && py < cy + radius && py > cy - radius
}

/// Nearest item to `origin` by Euclidean distance; the earliest wins ties.
pub fn closest<'a, T, I>(origin: Position, items: I) -> Option<&'a T>
where
    T: Located + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let d = origin.distance_to(item.position());
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((item, d));
        }
    }
    best.map(|(item, _)| item)
}

/// Candidate cell that gets closest to `target`; the earliest wins ties.
#[must_use]
pub fn step_towards(candidates: &[Position], target: Position) -> Option<Position> {
    closest(target, candidates).copied()
}
