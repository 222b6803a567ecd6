//! Touch adapter: long-press a card, then tap a day.

use super::{commit, pick_up, GestureAdapter, GestureError};
use crate::model::card::{CardId, CardType};
use crate::service::planner_service::PlannerSession;

#[derive(Debug, Default)]
pub struct TapAdapter {
    selected: Option<CardType>,
}

impl TapAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Long-press on a deck card selects it for the next tap.
    pub fn select(
        &mut self,
        card_type: CardType,
        session: &PlannerSession,
    ) -> Result<(), GestureError> {
        self.selected = Some(pick_up(card_type, session)?);
        Ok(())
    }

    /// Taps a day cell, placing the selected card there.
    pub fn tap(
        &mut self,
        cell_index: usize,
        session: &mut PlannerSession,
    ) -> Result<CardId, GestureError> {
        commit(&mut self.selected, cell_index, session)
    }
}

impl GestureAdapter for TapAdapter {
    fn pending(&self) -> Option<CardType> {
        self.selected
    }

    fn cancel(&mut self) {
        self.selected = None;
    }
}
