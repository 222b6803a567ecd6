//! Derived planner statistics.
//!
//! # Responsibility
//! - Count placed days and distinct cards per type.
//! - Derive the monthly completion rate.
//!
//! # Invariants
//! - Pure function of the grid; nothing here is cached or stored.
//! - A card spanning several cells counts once.

use crate::calendar::grid::CalendarGrid;
use crate::model::card::CardType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of grid-derived counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerStats {
    pub effort_days: u32,
    pub slump_days: u32,
    pub total_dated_days: u32,
    pub effort_cards_used: u32,
    pub slump_cards_used: u32,
    /// Rounded percentage of dated days covered by effort cards.
    pub completion_rate: u32,
}

impl PlannerStats {
    pub fn days(&self, card_type: CardType) -> u32 {
        match card_type {
            CardType::Effort => self.effort_days,
            CardType::Slump => self.slump_days,
        }
    }

    pub fn cards_used(&self, card_type: CardType) -> u32 {
        match card_type {
            CardType::Effort => self.effort_cards_used,
            CardType::Slump => self.slump_cards_used,
        }
    }
}

/// Computes statistics for one grid snapshot.
pub fn compute(grid: &CalendarGrid) -> PlannerStats {
    let mut stats = PlannerStats::default();
    let mut effort_ids = HashSet::new();
    let mut slump_ids = HashSet::new();

    for cell in grid.cells().iter().filter(|cell| cell.is_dated()) {
        stats.total_dated_days += 1;
        match (cell.card_type, cell.card_id) {
            (Some(CardType::Effort), Some(card_id)) => {
                stats.effort_days += 1;
                effort_ids.insert(card_id);
            }
            (Some(CardType::Slump), Some(card_id)) => {
                stats.slump_days += 1;
                slump_ids.insert(card_id);
            }
            _ => {}
        }
    }

    stats.effort_cards_used = count_u32(effort_ids.len());
    stats.slump_cards_used = count_u32(slump_ids.len());
    stats.completion_rate = completion_rate(stats.effort_days, stats.total_dated_days);
    stats
}

/// `round(effort_days / total_dated_days * 100)`, or 0 for an empty month.
pub fn completion_rate(effort_days: u32, total_dated_days: u32) -> u32 {
    if total_dated_days == 0 {
        return 0;
    }
    let ratio = f64::from(effort_days) / f64::from(total_dated_days) * 100.0;
    ratio.round() as u32
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
