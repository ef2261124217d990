//! Core domain types for quadrants.

use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player A (goes first).
    A,
    /// Player B (goes second).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Short display label ("A" or "B").
    pub fn label(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.label())
    }
}

/// Claim state of a single tile, as stored on the board.
///
/// Claims are monotonic: a tile transitions from `Unclaimed` to
/// `Claimed` at most once and is never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileClaim {
    /// No player has claimed this tile.
    Unclaimed,
    /// Tile claimed by a player.
    Claimed(Player),
}

/// Display projection of a tile for renderers.
///
/// Distinct from [`TileClaim`]: once a quadrant is credited, every tile
/// of its 3x3 block projects as `Credited` regardless of who claimed the
/// individual tile. The marking is purely cosmetic; claim state and
/// credit state are never conflated in the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileView {
    /// No player has claimed this tile.
    Unclaimed,
    /// Tile claimed by a player.
    Claimed(Player),
    /// Tile lies inside a quadrant credited to a player.
    Credited(Player),
}

/// 6x6 board of tile claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row - 1][column - 1]`.
    cells: [[TileClaim; 6]; 6],
}

impl Board {
    /// Creates a new board with every tile unclaimed.
    pub fn new() -> Self {
        Self {
            cells: [[TileClaim::Unclaimed; 6]; 6],
        }
    }

    /// Gets the claim state of the tile at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> TileClaim {
        self.cells[coordinate.row() as usize - 1][coordinate.column() as usize - 1]
    }

    /// Checks if the tile at the given coordinate is unclaimed.
    pub fn is_unclaimed(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == TileClaim::Unclaimed
    }

    /// Marks a tile as claimed by a player.
    ///
    /// Callers must validate the tile is unclaimed first; overwriting a
    /// claim is a programming error.
    pub(crate) fn claim(&mut self, coordinate: Coordinate, player: Player) {
        debug_assert!(self.is_unclaimed(coordinate));
        self.cells[coordinate.row() as usize - 1][coordinate.column() as usize - 1] =
            TileClaim::Claimed(player);
    }

    /// Returns the number of unclaimed tiles.
    pub fn unclaimed_count(&self) -> usize {
        Coordinate::all().filter(|c| self.is_unclaimed(*c)).count()
    }

    /// Checks if every tile has been claimed.
    pub fn is_full(&self) -> bool {
        self.unclaimed_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a game session.
///
/// Terminal once set: the engine never transitions out of `Won`, `Draw`,
/// or `Quit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Board filled with no winner.
    Draw,
    /// Session abandoned before completion.
    Quit,
}

impl Outcome {
    /// Returns true if the outcome is terminal.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Quit => write!(f, "Quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent().opponent(), Player::B);
    }

    #[test]
    fn test_new_board_fully_unclaimed() {
        let board = Board::new();
        assert_eq!(board.unclaimed_count(), 36);
        assert!(!board.is_full());
    }

    #[test]
    fn test_claim_updates_count() {
        let mut board = Board::new();
        let coord = Coordinate::new(3, 4).unwrap();
        board.claim(coord, Player::A);
        assert_eq!(board.get(coord), TileClaim::Claimed(Player::A));
        assert_eq!(board.unclaimed_count(), 35);
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won(Player::A).is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Quit.is_terminal());
    }
}
