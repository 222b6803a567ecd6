//! Card placement: validation and grid mutation.
//!
//! # Responsibility
//! - Classify candidate placements into accept/reject without side effects.
//! - Apply accepted placements and removals as new grid snapshots.
//!
//! # Invariants
//! - Rejections are expected outcomes, returned as values and never logged here.
//! - A rejected placement leaves the input grid untouched.

use crate::model::card::CardType;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod engine;
pub mod validator;

pub type PlacementResult<T> = Result<T, PlacementRejection>;

/// Reason a placement request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRejection {
    /// Anchor cell already carries a card.
    CellOccupied,
    /// Every card of this type is already on the grid.
    CapacityExhausted(CardType),
    /// Anchor is a leading blank or outside the grid.
    InvalidTarget,
    /// Run would leave the month or wrap into the next week row.
    InsufficientRun,
}

impl Display for PlacementRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CellOccupied => write!(f, "target cell already holds a card"),
            Self::CapacityExhausted(card_type) => {
                write!(f, "no {card_type} cards left to place")
            }
            Self::InvalidTarget => write!(f, "target cell is not a day of this month"),
            Self::InsufficientRun => {
                write!(f, "not enough consecutive days in this week for the card")
            }
        }
    }
}

impl Error for PlacementRejection {}
