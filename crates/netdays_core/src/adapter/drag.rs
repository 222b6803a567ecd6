//! Pointer drag-and-drop adapter.

use super::{commit, pick_up, GestureAdapter, GestureError};
use crate::model::card::{CardId, CardType};
use crate::service::planner_service::PlannerSession;

/// Desktop drag gesture: pick a card from the deck, drop it on a cell.
#[derive(Debug, Default)]
pub struct DragAdapter {
    dragging: Option<CardType>,
}

impl DragAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging a card; refused when none of that type is left.
    ///
    /// A drag already in progress is replaced.
    pub fn start(
        &mut self,
        card_type: CardType,
        session: &PlannerSession,
    ) -> Result<(), GestureError> {
        self.dragging = Some(pick_up(card_type, session)?);
        Ok(())
    }

    /// Drops the dragged card on `cell_index`.
    pub fn drop_on(
        &mut self,
        cell_index: usize,
        session: &mut PlannerSession,
    ) -> Result<CardId, GestureError> {
        commit(&mut self.dragging, cell_index, session)
    }
}

impl GestureAdapter for DragAdapter {
    fn pending(&self) -> Option<CardType> {
        self.dragging
    }

    fn cancel(&mut self) {
        self.dragging = None;
    }
}
