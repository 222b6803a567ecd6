//! Domain model for the monthly card planner.
//!
//! # Responsibility
//! - Define card, day-cell and month value types shared by every component.
//! - Keep one cell-centric shape: cards exist only as fields on day cells.
//!
//! # Invariants
//! - A card has no storage outside the cells that carry its `CardId`.
//! - Effort cells always carry a theme index, slump cells never do.

pub mod card;
pub mod cell;
pub mod month;
