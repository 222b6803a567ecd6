//! Placement engine over immutable grid snapshots.
//!
//! # Responsibility
//! - Run validation against the snapshot current at call time.
//! - Assign fresh card ids and write run cells for accepted placements.
//! - Clear every cell of a card on removal.
//!
//! # Invariants
//! - Inputs are never mutated; every change yields a new `CalendarGrid`.
//! - Used-card counts come from `stats::compute`, never from a stored counter.
//! - Removing an unknown card id is a no-op, not an error.

use super::validator::validate;
use super::PlacementResult;
use crate::calendar::grid::CalendarGrid;
use crate::config::PlannerConfig;
use crate::model::card::{CardId, CardType};
use crate::stats;
use uuid::Uuid;

/// Accepted placement result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: CalendarGrid,
    pub card_id: CardId,
    /// Cell indices written for the new card.
    pub cells: Vec<usize>,
}

/// Removal result; `cleared_cells` is empty when the card was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub grid: CalendarGrid,
    pub cleared_cells: Vec<usize>,
}

/// Applies placements and removals under one capacity configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementEngine {
    config: PlannerConfig,
}

impl PlacementEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Places a `card_type` card anchored at `start_index`.
    ///
    /// Effort cards write theme indices `0, 1, 2` across their run; slump
    /// cards write no theme. Cells outside the run are untouched.
    ///
    /// # Errors
    /// - Returns the first `PlacementRejection` raised by validation.
    pub fn place(
        &self,
        grid: &CalendarGrid,
        start_index: usize,
        card_type: CardType,
    ) -> PlacementResult<Placement> {
        let used = stats::compute(grid).cards_used(card_type);
        validate(
            grid,
            start_index,
            card_type,
            used,
            self.config.capacity(card_type),
        )?;

        let card_id = fresh_card_id(grid);
        let mut next = grid.clone();
        let run = start_index..start_index + card_type.run_length();
        for (cell, theme_index) in next.cells_mut()[run.clone()].iter_mut().zip(0u8..) {
            cell.assign(card_id, card_type, card_type.uses_themes().then_some(theme_index));
        }

        Ok(Placement {
            grid: next,
            card_id,
            cells: run.collect(),
        })
    }

    /// Clears every cell carrying `card_id`.
    pub fn remove(&self, grid: &CalendarGrid, card_id: CardId) -> Removal {
        let mut next = grid.clone();
        let mut cleared_cells = Vec::new();
        for cell in next.cells_mut() {
            if cell.card_id == Some(card_id) {
                cell.clear();
                cleared_cells.push(cell.index);
            }
        }
        Removal {
            grid: next,
            cleared_cells,
        }
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

fn fresh_card_id(grid: &CalendarGrid) -> CardId {
    loop {
        let candidate = Uuid::new_v4();
        if grid.cells().iter().all(|cell| cell.card_id != Some(candidate)) {
            return candidate;
        }
    }
}
