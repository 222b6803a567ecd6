//! Placement validation.
//!
//! # Invariants
//! - Checks run in a fixed order: occupancy, capacity, target, run.
//! - Only the anchor cell is checked for occupancy. Interior cells of a run
//!   are checked for existence, date and week-row crossing only.

use super::{PlacementRejection, PlacementResult};
use crate::calendar::grid::{CalendarGrid, DAYS_PER_WEEK};
use crate::model::card::CardType;

/// Validates placing a `card_type` card anchored at `start_index`.
///
/// `used` and `capacity` are the counts for `card_type` only.
pub fn validate(
    grid: &CalendarGrid,
    start_index: usize,
    card_type: CardType,
    used: u32,
    capacity: u32,
) -> PlacementResult<()> {
    let anchor = grid.cell(start_index);

    if anchor.is_some_and(|cell| cell.is_placed()) {
        return Err(PlacementRejection::CellOccupied);
    }
    if used >= capacity {
        return Err(PlacementRejection::CapacityExhausted(card_type));
    }
    if !anchor.is_some_and(|cell| cell.is_dated()) {
        return Err(PlacementRejection::InvalidTarget);
    }

    for offset in 0..card_type.run_length() {
        let index = start_index + offset;
        let dated = grid.cell(index).is_some_and(|cell| cell.is_dated());
        if !dated || (offset > 0 && index % DAYS_PER_WEEK == 0) {
            return Err(PlacementRejection::InsufficientRun);
        }
    }

    Ok(())
}
