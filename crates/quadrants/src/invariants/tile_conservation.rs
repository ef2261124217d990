//! Tile conservation invariant: claims and unclaimed tiles sum to 36.

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: claimed tiles of both players plus unclaimed tiles always
/// total the 36 board tiles.
pub struct TileConservationInvariant;

impl Invariant<GameState> for TileConservationInvariant {
    fn holds(state: &GameState) -> bool {
        let claimed = state.claims(Player::A).len() + state.claims(Player::B).len();
        claimed + state.board().unclaimed_count() == 36
    }

    fn description() -> &'static str {
        "Claimed tiles plus unclaimed tiles total 36"
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
        assert!(TileConservationInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_throughout_a_session() {
        let mut state = GameState::new();
        for coordinate in [coord(1, 1), coord(2, 5), coord(6, 3), coord(4, 4)] {
            state.apply_move(coordinate).unwrap();
            assert!(TileConservationInvariant::holds(&state));
        }
    }

    #[test]
    fn test_holds_after_rejected_move() {
        let mut state = GameState::new();
        state.apply_move(coord(1, 1)).unwrap();
        let _ = state.apply_move(coord(1, 1));
        assert!(TileConservationInvariant::holds(&state));
    }
}
