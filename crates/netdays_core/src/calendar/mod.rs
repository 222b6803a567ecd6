//! Month grid generation.
//!
//! # Responsibility
//! - Lay out one month as a Sunday-first, 7-column cell sequence.
//! - Provide read-only grid queries used by placement, stats and views.
//!
//! # Invariants
//! - Every generated grid starts with no cards.

pub mod grid;
