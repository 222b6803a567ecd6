//! Planner configuration.
//!
//! # Responsibility
//! - Hold per-type card capacities with the stock defaults (7 effort, 3 slump).
//! - Load overrides from JSON and reject unusable values.
//!
//! # Invariants
//! - A validated config has every capacity within `1..=max` for its type.

use crate::model::card::CardType;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_EFFORT_CAPACITY: u32 = 7;
pub const DEFAULT_SLUMP_CAPACITY: u32 = 3;
/// Non-overlapping three-day runs cannot exceed 31 / 3 in any month.
pub const MAX_EFFORT_CAPACITY: u32 = 10;
pub const MAX_SLUMP_CAPACITY: u32 = 31;

/// Configuration load/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Input is not valid config JSON.
    Parse(String),
    ZeroCapacity(CardType),
    CapacityTooLarge {
        card_type: CardType,
        capacity: u32,
        max: u32,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid planner config: {message}"),
            Self::ZeroCapacity(card_type) => {
                write!(f, "{card_type} capacity must be at least 1")
            }
            Self::CapacityTooLarge {
                card_type,
                capacity,
                max,
            } => write!(f, "{card_type} capacity {capacity} exceeds maximum {max}"),
        }
    }
}

impl Error for ConfigError {}

/// Card capacities per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub effort_capacity: u32,
    pub slump_capacity: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            effort_capacity: DEFAULT_EFFORT_CAPACITY,
            slump_capacity: DEFAULT_SLUMP_CAPACITY,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON config; missing fields keep defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for card_type in CardType::ALL {
            let capacity = self.capacity(card_type);
            let max = max_capacity(card_type);
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity(card_type));
            }
            if capacity > max {
                return Err(ConfigError::CapacityTooLarge {
                    card_type,
                    capacity,
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn capacity(&self, card_type: CardType) -> u32 {
        match card_type {
            CardType::Effort => self.effort_capacity,
            CardType::Slump => self.slump_capacity,
        }
    }
}

fn max_capacity(card_type: CardType) -> u32 {
    match card_type {
        CardType::Effort => MAX_EFFORT_CAPACITY,
        CardType::Slump => MAX_SLUMP_CAPACITY,
    }
}
