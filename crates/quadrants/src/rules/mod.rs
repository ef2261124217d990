//! Game rules for quadrants.
//!
//! This module contains pure functions for evaluating game state
//! according to quadrants rules. Rules are separated from board storage
//! so they can be tested and composed independently.

pub mod credit;
pub mod outcome;

pub use credit::newly_completed;
pub use outcome::holds_diagonal_pair;
