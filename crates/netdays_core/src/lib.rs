//! Core planning logic for netdays.
//! Grid generation, card placement rules and derived statistics live here;
//! rendering and gesture capture stay with callers.

pub mod adapter;
pub mod calendar;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod placement;
pub mod service;
pub mod stats;

pub use adapter::drag::DragAdapter;
pub use adapter::tap::TapAdapter;
pub use adapter::{GestureAdapter, GestureError};
pub use calendar::grid::{generate_grid, CalendarGrid, DAYS_PER_WEEK, WEEKDAY_LABELS};
pub use config::{ConfigError, PlannerConfig};
pub use inventory::{CardBalance, CardInventory};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::card::{CardId, CardType, Theme};
pub use model::cell::DayCell;
pub use model::month::{Month, MonthError};
pub use placement::engine::{Placement, PlacementEngine, Removal};
pub use placement::validator::validate;
pub use placement::{PlacementRejection, PlacementResult};
pub use service::planner_service::{PlacementOutcome, PlannerSession, PlannerView};
pub use stats::{compute as compute_stats, PlannerStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
