//! First-class move types for quadrants.
//!
//! Claims are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::coordinate::Coordinate;
use crate::quadrant::Quadrant;
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move in quadrants: a player claiming an unclaimed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    /// The player making the claim.
    pub player: Player,
    /// The tile being claimed.
    pub coordinate: Coordinate,
}

impl Claim {
    /// Creates a new claim.
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable input-validation signals; the caller is
/// expected to re-prompt rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ClaimError {
    /// The coordinate lies outside the 6x6 board.
    #[display("coordinate ({}, {}) is outside the 6x6 board", row, column)]
    CoordinateOutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        column: u8,
    },

    /// The tile at the coordinate has already been claimed.
    #[display("tile {} is already claimed", _0)]
    TileAlreadyClaimed(Coordinate),

    /// The game has already reached a terminal outcome.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for ClaimError {}

/// Result of a successfully applied move.
///
/// Collapses tile claiming and quadrant-credit evaluation into one
/// atomic report: the quadrants newly credited by this move (usually
/// empty) and the outcome after the turn resolved.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReceipt {
    /// Quadrants credited to the mover by this claim, in canonical order.
    newly_credited: Vec<Quadrant>,
    /// Outcome after the move resolved.
    outcome: Outcome,
}

impl MoveReceipt {
    /// Creates a new receipt.
    pub(crate) fn new(newly_credited: Vec<Quadrant>, outcome: Outcome) -> Self {
        Self {
            newly_credited,
            outcome,
        }
    }
}
