//! Diagonal-pair detection for the win/draw state machine.

use crate::quadrant::Quadrant;
use tracing::instrument;

/// The two diagonal quadrant pairs.
pub const DIAGONAL_PAIRS: [(Quadrant, Quadrant); 2] = [
    (Quadrant::TopLeft, Quadrant::BottomRight),
    (Quadrant::TopRight, Quadrant::BottomLeft),
];

/// Checks whether a credited-quadrant set holds both quadrants of either
/// diagonal pair.
///
/// Only the mover's own set ever needs checking after a move: the
/// condition can only become true for the player who was just credited a
/// quadrant.
#[instrument]
pub fn holds_diagonal_pair(credits: &[Quadrant]) -> bool {
    DIAGONAL_PAIRS
        .iter()
        .any(|(first, second)| credits.contains(first) && credits.contains(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_pair() {
        assert!(!holds_diagonal_pair(&[]));
    }

    #[test]
    fn test_single_quadrant_is_not_a_pair() {
        assert!(!holds_diagonal_pair(&[Quadrant::TopLeft]));
    }

    #[test]
    fn test_adjacent_quadrants_are_not_a_pair() {
        assert!(!holds_diagonal_pair(&[Quadrant::TopLeft, Quadrant::TopRight]));
        assert!(!holds_diagonal_pair(&[
            Quadrant::BottomLeft,
            Quadrant::BottomRight
        ]));
    }

    #[test]
    fn test_both_diagonal_pairs_detected() {
        assert!(holds_diagonal_pair(&[
            Quadrant::TopLeft,
            Quadrant::BottomRight
        ]));
        assert!(holds_diagonal_pair(&[
            Quadrant::TopRight,
            Quadrant::BottomLeft
        ]));
    }

    #[test]
    fn test_pair_detected_among_other_credits() {
        assert!(holds_diagonal_pair(&[
            Quadrant::TopRight,
            Quadrant::TopLeft,
            Quadrant::BottomRight,
        ]));
    }

    #[test]
    fn test_pairs_match_diagonal_partner() {
        for (first, second) in DIAGONAL_PAIRS {
            assert_eq!(first.diagonal_partner(), second);
        }
    }
}
