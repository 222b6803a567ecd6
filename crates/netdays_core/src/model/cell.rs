//! Day cell model.
//!
//! # Invariants
//! - `card_id`, `card_type` are either both set or both unset.
//! - `theme_index` is set only on effort cells.
//! - Cells without `date` are leading blanks and never carry a card.

use crate::model::card::{CardId, CardType, Theme};
use serde::{Deserialize, Serialize};

/// One position in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Position in the grid, row-major with 7 columns starting on Sunday.
    pub index: usize,
    /// Day of month; `None` for leading blanks before day 1.
    pub date: Option<u32>,
    /// Card occupying this cell.
    pub card_id: Option<CardId>,
    pub card_type: Option<CardType>,
    /// Offset within an effort run (`0..=2`).
    pub theme_index: Option<u8>,
}

impl DayCell {
    /// Creates an unplaceable leading blank.
    pub fn blank(index: usize) -> Self {
        Self {
            index,
            date: None,
            card_id: None,
            card_type: None,
            theme_index: None,
        }
    }

    /// Creates an empty cell for one day of the month.
    pub fn dated(index: usize, date: u32) -> Self {
        Self {
            date: Some(date),
            ..Self::blank(index)
        }
    }

    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }

    /// Returns whether a card currently owns this cell.
    pub fn is_placed(&self) -> bool {
        self.card_id.is_some()
    }

    /// Resolved theme for effort cells.
    pub fn theme(&self) -> Option<Theme> {
        self.theme_index.and_then(Theme::from_index)
    }

    pub(crate) fn assign(&mut self, card_id: CardId, card_type: CardType, theme_index: Option<u8>) {
        self.card_id = Some(card_id);
        self.card_type = Some(card_type);
        self.theme_index = theme_index;
    }

    pub(crate) fn clear(&mut self) {
        self.card_id = None;
        self.card_type = None;
        self.theme_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::DayCell;
    use crate::model::card::{CardType, Theme};
    use uuid::Uuid;

    #[test]
    fn blank_and_dated_start_unplaced() {
        let blank = DayCell::blank(0);
        assert!(!blank.is_dated());
        assert!(!blank.is_placed());

        let dated = DayCell::dated(4, 1);
        assert_eq!(dated.date, Some(1));
        assert!(!dated.is_placed());
    }

    #[test]
    fn assign_then_clear_resets_all_card_fields() {
        let mut cell = DayCell::dated(5, 2);
        cell.assign(Uuid::new_v4(), CardType::Effort, Some(1));
        assert!(cell.is_placed());
        assert_eq!(cell.theme(), Some(Theme::Hobby));

        cell.clear();
        assert_eq!(cell, DayCell::dated(5, 2));
    }
}
