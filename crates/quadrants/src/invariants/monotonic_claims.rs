//! Monotonic claims invariant: tiles are never reassigned or reverted.

use super::Invariant;
use crate::game::GameState;
use crate::types::{Board, TileClaim};

/// Invariant: the board matches a replay of the claim history.
///
/// Every tile claimed in the history must have been unclaimed at the
/// time, and the reconstruction must reproduce the current board. A tile
/// reassigned to the other player or reverted to unclaimed fails both
/// conditions.
pub struct MonotonicClaimsInvariant;

impl Invariant<GameState> for MonotonicClaimsInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for claim in state.history() {
            if reconstructed.get(claim.coordinate) != TileClaim::Unclaimed {
                return false;
            }
            reconstructed.claim(claim.coordinate, claim.player);
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board tiles are monotonic (claimed once, never reassigned)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    fn coord(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicClaimsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let state =
            GameState::replay(&[coord(1, 1), coord(6, 6), coord(3, 4), coord(4, 3)]).unwrap();
        assert!(MonotonicClaimsInvariant::holds(&state));
    }
}
