//! Planner use-case services.
//!
//! # Responsibility
//! - Own the single current month/grid state behind one session value.
//! - Translate navigation, reset, placement and removal requests into core calls.
//!
//! # See also
//! - `adapter` for gesture front ends over a session.

pub mod planner_service;
