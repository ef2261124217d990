//! Monotonic credits invariant: quadrant credit is permanent and unique.

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: credited-quadrant sets are duplicate-free, disjoint across
/// players, and each credited quadrant's control pattern lies entirely in
/// its owner's claim set.
pub struct MonotonicCreditsInvariant;

impl Invariant<GameState> for MonotonicCreditsInvariant {
    fn holds(state: &GameState) -> bool {
        for player in [Player::A, Player::B] {
            let credits = state.credits(player);

            for (index, quadrant) in credits.iter().enumerate() {
                // No duplicates within a player's set.
                if credits[index + 1..].contains(quadrant) {
                    return false;
                }
                // A quadrant belongs to at most one player.
                if state.credits(player.opponent()).contains(quadrant) {
                    return false;
                }
                // Credit implies the full control pattern was claimed.
                if !quadrant
                    .control_pattern()
                    .iter()
                    .all(|tile| state.claims(player).contains(tile))
                {
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "Quadrant credits are unique, exclusive, and backed by claims"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::quadrant::Quadrant;

    fn coord(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicCreditsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_credit() {
        let state = GameState::replay(&[
            coord(1, 1),
            coord(4, 4),
            coord(1, 3),
            coord(4, 6),
            coord(2, 2),
            coord(5, 5),
            coord(3, 1),
            coord(6, 4),
            coord(3, 3), // credits top-left to A
        ])
        .unwrap();

        assert_eq!(state.credits(Player::A), &[Quadrant::TopLeft]);
        assert!(MonotonicCreditsInvariant::holds(&state));
    }
}
