//! Gesture adapters over one planner session.
//!
//! # Responsibility
//! - Track the single in-progress gesture (which card type is in hand).
//! - Turn a completed gesture into exactly one `PlannerSession::place` call.
//!
//! # Invariants
//! - Adapters never hold planner state; the session is passed per call.
//! - Cancelling a gesture never touches the session.
//! - A gesture is disarmed after every commit attempt, accepted or not.

use crate::model::card::{CardId, CardType};
use crate::placement::PlacementRejection;
use crate::service::planner_service::PlannerSession;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod drag;
pub mod tap;

/// Gesture-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// No card of this type is left in the inventory to pick up.
    CardUnavailable(CardType),
    /// Commit without a card in hand.
    NoActiveGesture,
    /// The session refused the placement.
    Rejected(PlacementRejection),
}

impl Display for GestureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CardUnavailable(card_type) => write!(f, "no {card_type} card left to pick up"),
            Self::NoActiveGesture => write!(f, "no card is being placed"),
            Self::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl Error for GestureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<PlacementRejection> for GestureError {
    fn from(value: PlacementRejection) -> Self {
        Self::Rejected(value)
    }
}

/// Common surface of input adapters.
pub trait GestureAdapter {
    /// Card type currently in hand.
    fn pending(&self) -> Option<CardType>;
    /// Drops the gesture without committing.
    fn cancel(&mut self);
}

fn pick_up(card_type: CardType, session: &PlannerSession) -> Result<CardType, GestureError> {
    if session.inventory().remaining(card_type) == 0 {
        return Err(GestureError::CardUnavailable(card_type));
    }
    Ok(card_type)
}

fn commit(
    pending: &mut Option<CardType>,
    start_index: usize,
    session: &mut PlannerSession,
) -> Result<CardId, GestureError> {
    let card_type = pending.take().ok_or(GestureError::NoActiveGesture)?;
    session
        .place(start_index, card_type)
        .map_err(GestureError::from)
}
