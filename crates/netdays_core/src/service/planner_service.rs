//! Planner session service.
//!
//! # Responsibility
//! - Hold the current month, grid snapshot, config and last request outcome.
//! - Recompute stats after every generate, place and remove.
//! - Expose read-only views for UI layers.
//!
//! # Invariants
//! - Every request runs to completion against the snapshot current at call time.
//! - Navigation and reset regenerate the grid, discarding every card.
//! - A failed navigation leaves month and grid unchanged.
//! - Diagnostics are logged at debug level only; user messaging is left to callers.

use crate::calendar::grid::{generate_grid, CalendarGrid, WEEKDAY_LABELS};
use crate::config::{ConfigError, PlannerConfig};
use crate::inventory::CardInventory;
use crate::model::card::{CardId, CardType};
use crate::model::cell::DayCell;
use crate::model::month::{Month, MonthError};
use crate::placement::engine::PlacementEngine;
use crate::placement::{PlacementRejection, PlacementResult};
use crate::stats::{self, PlannerStats};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Result of the latest placement or removal request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlacementOutcome {
    Placed {
        card_id: CardId,
        card_type: CardType,
        start_index: usize,
    },
    Removed {
        card_id: CardId,
        cleared_cells: Vec<usize>,
    },
    /// Removal of a card id not present on the grid.
    RemoveNoop { card_id: CardId },
    Rejected { reason: PlacementRejection },
}

/// Read-only snapshot handed to UI layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerView {
    pub month: Month,
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<DayCell>,
    pub stats: PlannerStats,
    pub inventory: CardInventory,
    pub effort_card_ids: Vec<CardId>,
    pub slump_card_ids: Vec<CardId>,
    pub last_outcome: Option<PlacementOutcome>,
}

/// One planner instance; the only owner of mutable planner state.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    month: Month,
    grid: CalendarGrid,
    stats: PlannerStats,
    engine: PlacementEngine,
    last_outcome: Option<PlacementOutcome>,
}

impl PlannerSession {
    /// Creates a session showing `month` with an empty grid.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config` fails validation.
    pub fn new(month: Month, config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate_grid(month);
        let stats = stats::compute(&grid);
        debug!(
            "event=session_open module=planner status=ok month={} effort_capacity={} slump_capacity={}",
            month, config.effort_capacity, config.slump_capacity
        );
        Ok(Self {
            month,
            grid,
            stats,
            engine: PlacementEngine::new(config),
            last_outcome: None,
        })
    }

    /// Creates a session for the current local month.
    pub fn for_today(config: PlannerConfig) -> Result<Self, ConfigError> {
        Self::new(Month::from_date(chrono::Local::now().date_naive()), config)
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn stats(&self) -> PlannerStats {
        self.stats
    }

    pub fn config(&self) -> &PlannerConfig {
        self.engine.config()
    }

    pub fn inventory(&self) -> CardInventory {
        CardInventory::from_stats(&self.stats, self.engine.config())
    }

    pub fn last_outcome(&self) -> Option<&PlacementOutcome> {
        self.last_outcome.as_ref()
    }

    /// Distinct placed card ids of one type in grid order.
    pub fn used_card_ids(&self, card_type: CardType) -> Vec<CardId> {
        self.grid.card_ids(card_type)
    }

    /// Places one card; the grid changes only on success.
    pub fn place(&mut self, start_index: usize, card_type: CardType) -> PlacementResult<CardId> {
        match self.engine.place(&self.grid, start_index, card_type) {
            Ok(placement) => {
                debug!(
                    "event=card_place module=planner status=ok card_type={} start_index={} cells={:?}",
                    card_type, start_index, placement.cells
                );
                self.grid = placement.grid;
                self.refresh_stats();
                self.last_outcome = Some(PlacementOutcome::Placed {
                    card_id: placement.card_id,
                    card_type,
                    start_index,
                });
                Ok(placement.card_id)
            }
            Err(reason) => {
                debug!(
                    "event=card_place module=planner status=rejected card_type={} start_index={} reason={:?}",
                    card_type, start_index, reason
                );
                self.last_outcome = Some(PlacementOutcome::Rejected { reason });
                Err(reason)
            }
        }
    }

    /// Removes one card; unknown ids are a no-op.
    ///
    /// Returns the indices that were cleared.
    pub fn remove(&mut self, card_id: CardId) -> Vec<usize> {
        let removal = self.engine.remove(&self.grid, card_id);
        if removal.cleared_cells.is_empty() {
            debug!("event=card_remove module=planner status=noop");
            self.last_outcome = Some(PlacementOutcome::RemoveNoop { card_id });
            return removal.cleared_cells;
        }

        debug!(
            "event=card_remove module=planner status=ok cells={:?}",
            removal.cleared_cells
        );
        self.grid = removal.grid;
        self.refresh_stats();
        self.last_outcome = Some(PlacementOutcome::Removed {
            card_id,
            cleared_cells: removal.cleared_cells.clone(),
        });
        removal.cleared_cells
    }

    /// Moves by `delta_months` and regenerates an empty grid.
    ///
    /// # Errors
    /// - Returns `MonthError::OutOfRange` when the target month is unsupported;
    ///   the session is left unchanged.
    pub fn navigate(&mut self, delta_months: i32) -> Result<Month, MonthError> {
        let target = match self.month.shift(delta_months) {
            Ok(month) => month,
            Err(err) => {
                warn!(
                    "event=month_navigate module=planner status=error from={} delta={} error={}",
                    self.month, delta_months, err
                );
                return Err(err);
            }
        };
        debug!(
            "event=month_navigate module=planner status=ok from={} to={}",
            self.month, target
        );
        self.regenerate(target);
        Ok(target)
    }

    /// Jumps to an explicit month and regenerates an empty grid.
    pub fn show_month(&mut self, month: Month) {
        debug!(
            "event=month_show module=planner status=ok from={} to={}",
            self.month, month
        );
        self.regenerate(month);
    }

    /// Discards every card in the current month.
    pub fn reset(&mut self) {
        debug!(
            "event=month_reset module=planner status=ok month={} cards={}",
            self.month,
            self.stats.effort_cards_used + self.stats.slump_cards_used
        );
        self.regenerate(self.month);
    }

    /// Builds a serializable snapshot of everything a UI renders.
    pub fn view(&self) -> PlannerView {
        PlannerView {
            month: self.month,
            weekday_labels: WEEKDAY_LABELS,
            cells: self.grid.cells().to_vec(),
            stats: self.stats,
            inventory: self.inventory(),
            effort_card_ids: self.grid.card_ids(CardType::Effort),
            slump_card_ids: self.grid.card_ids(CardType::Slump),
            last_outcome: self.last_outcome.clone(),
        }
    }

    fn regenerate(&mut self, month: Month) {
        self.month = month;
        self.grid = generate_grid(month);
        self.refresh_stats();
        self.last_outcome = None;
    }

    fn refresh_stats(&mut self) {
        self.stats = stats::compute(&self.grid);
    }
}

#[cfg(test)]
mod tests {
    use super::{PlacementOutcome, PlannerSession};
    use crate::config::PlannerConfig;
    use crate::model::card::CardType;
    use crate::model::month::Month;
    use crate::placement::PlacementRejection;

    fn session() -> PlannerSession {
        PlannerSession::new(Month::new(2023, 11).expect("month"), PlannerConfig::default())
            .expect("session")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = PlannerConfig {
            slump_capacity: 0,
            ..PlannerConfig::default()
        };
        assert!(PlannerSession::new(Month::new(2024, 1).expect("month"), config).is_err());
    }

    #[test]
    fn place_updates_stats_and_outcome() {
        let mut session = session();
        let card_id = session.place(3, CardType::Effort).expect("place");

        assert_eq!(session.stats().effort_days, 3);
        assert_eq!(session.stats().effort_cards_used, 1);
        assert_eq!(session.stats().completion_rate, 10);
        assert_eq!(
            session.last_outcome(),
            Some(&PlacementOutcome::Placed {
                card_id,
                card_type: CardType::Effort,
                start_index: 3,
            })
        );
    }

    #[test]
    fn rejected_place_records_reason_and_keeps_grid() {
        let mut session = session();
        let before = session.grid().clone();
        let err = session.place(6, CardType::Effort).expect_err("week crossing");
        assert_eq!(err, PlacementRejection::InsufficientRun);
        assert_eq!(session.grid(), &before);
        assert_eq!(
            session.last_outcome(),
            Some(&PlacementOutcome::Rejected {
                reason: PlacementRejection::InsufficientRun
            })
        );
    }

    #[test]
    fn navigate_out_of_range_leaves_session_unchanged() {
        let mut session = session();
        session.place(3, CardType::Slump).expect("place");
        let before = session.grid().clone();

        assert!(session.navigate(i32::MAX).is_err());
        assert_eq!(session.month(), Month::new(2023, 11).expect("month"));
        assert_eq!(session.grid(), &before);
    }
}
