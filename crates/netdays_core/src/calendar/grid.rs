//! Calendar grid snapshot and generator.

use crate::model::card::{CardId, CardType};
use crate::model::cell::DayCell;
use crate::model::month::Month;
use serde::Serialize;

/// Columns per week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Immutable-by-API grid of one month.
///
/// Placement produces new snapshots; callers only get shared access to cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    month: Month,
    cells: Vec<DayCell>,
}

/// Builds a fresh, card-free grid for `month`.
///
/// Emits one blank per weekday before day 1, then one cell per day.
pub fn generate_grid(month: Month) -> CalendarGrid {
    let leading = month.first_weekday() as usize;
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend((0..leading).map(DayCell::blank));
    cells.extend(
        (1..=days)
            .zip(leading..)
            .map(|(date, index)| DayCell::dated(index, date)),
    );
    CalendarGrid { month, cells }
}

impl CalendarGrid {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of blanks before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| !cell.is_dated()).count()
    }

    pub fn dated_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_dated()).count()
    }

    /// Week rows of up to 7 cells; the last row may be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    /// Distinct card ids of one type, ordered by first cell appearance.
    pub fn card_ids(&self, card_type: CardType) -> Vec<CardId> {
        let mut ids: Vec<CardId> = Vec::new();
        for cell in &self.cells {
            if cell.card_type != Some(card_type) {
                continue;
            }
            if let Some(card_id) = cell.card_id {
                if !ids.contains(&card_id) {
                    ids.push(card_id);
                }
            }
        }
        ids
    }

    /// Grid indices currently owned by `card_id`, ascending.
    pub fn card_cells(&self, card_id: CardId) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.card_id == Some(card_id))
            .map(|cell| cell.index)
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [DayCell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_grid, DAYS_PER_WEEK, WEEKDAY_LABELS};
    use crate::model::month::Month;

    #[test]
    fn leap_february_2024_has_four_blanks_and_29_days() {
        let grid = generate_grid(Month::new(2024, 2).expect("month"));
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.dated_count(), 29);
        assert_eq!(grid.len(), 33);
        assert_eq!(grid.row_count(), 5);
    }

    #[test]
    fn cell_index_matches_position_and_dates_are_sequential() {
        let grid = generate_grid(Month::new(2024, 5).expect("month"));
        for (position, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.index, position);
            assert!(!cell.is_placed());
        }
        let dates: Vec<u32> = grid.cells().iter().filter_map(|cell| cell.date).collect();
        assert_eq!(dates, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn month_starting_sunday_has_no_blanks() {
        let grid = generate_grid(Month::new(2023, 10).expect("month"));
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.cell(0).and_then(|cell| cell.date), Some(1));
    }

    #[test]
    fn rows_are_week_sized() {
        let grid = generate_grid(Month::new(2024, 2).expect("month"));
        let widths: Vec<usize> = grid.rows().map(<[_]>::len).collect();
        assert_eq!(widths, vec![7, 7, 7, 7, 5]);
        assert_eq!(WEEKDAY_LABELS.len(), DAYS_PER_WEEK);
        assert_eq!(WEEKDAY_LABELS[0], "Sun");
    }
}
