//! Remaining card inventory.
//!
//! Usage is read from `PlannerStats`, so remaining counts can never drift
//! from what is actually on the grid.

use crate::calendar::grid::CalendarGrid;
use crate::config::PlannerConfig;
use crate::model::card::CardType;
use crate::stats::{self, PlannerStats};
use serde::{Deserialize, Serialize};

/// Capacity and usage for one card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBalance {
    pub capacity: u32,
    pub used: u32,
    pub remaining: u32,
}

impl CardBalance {
    fn new(capacity: u32, used: u32) -> Self {
        Self {
            capacity,
            used,
            remaining: capacity.saturating_sub(used),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Inventory view for both card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInventory {
    pub effort: CardBalance,
    pub slump: CardBalance,
}

impl CardInventory {
    /// Derives inventory from the latest stats.
    pub fn from_stats(stats: &PlannerStats, config: &PlannerConfig) -> Self {
        Self {
            effort: CardBalance::new(config.effort_capacity, stats.effort_cards_used),
            slump: CardBalance::new(config.slump_capacity, stats.slump_cards_used),
        }
    }

    /// Derives inventory straight from a grid.
    pub fn for_grid(grid: &CalendarGrid, config: &PlannerConfig) -> Self {
        Self::from_stats(&stats::compute(grid), config)
    }

    pub fn balance(&self, card_type: CardType) -> CardBalance {
        match card_type {
            CardType::Effort => self.effort,
            CardType::Slump => self.slump,
        }
    }

    pub fn remaining(&self, card_type: CardType) -> u32 {
        self.balance(card_type).remaining
    }
}

#[cfg(test)]
mod tests {
    use super::CardInventory;
    use crate::config::PlannerConfig;
    use crate::model::card::CardType;
    use crate::stats::PlannerStats;

    #[test]
    fn remaining_is_capacity_minus_used() {
        let stats = PlannerStats {
            effort_cards_used: 2,
            slump_cards_used: 3,
            ..PlannerStats::default()
        };
        let inventory = CardInventory::from_stats(&stats, &PlannerConfig::default());
        assert_eq!(inventory.remaining(CardType::Effort), 5);
        assert_eq!(inventory.remaining(CardType::Slump), 0);
        assert!(inventory.balance(CardType::Slump).is_exhausted());
    }

    #[test]
    fn remaining_saturates_when_capacity_shrinks_below_usage() {
        let stats = PlannerStats {
            effort_cards_used: 4,
            ..PlannerStats::default()
        };
        let config = PlannerConfig {
            effort_capacity: 2,
            ..PlannerConfig::default()
        };
        let inventory = CardInventory::from_stats(&stats, &config);
        assert_eq!(inventory.remaining(CardType::Effort), 0);
        assert_eq!(inventory.effort.used, 4);
    }
}
