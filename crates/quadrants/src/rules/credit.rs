//! Quadrant control-pattern evaluation.

use crate::coordinate::Coordinate;
use crate::quadrant::Quadrant;
use tracing::instrument;

/// Returns the quadrants the mover has just completed, in canonical order.
///
/// A quadrant is completed when every coordinate of its control pattern
/// appears in the mover's claim set. Quadrants already credited to either
/// player are skipped: credit is permanent and belongs to whoever
/// completed the pattern first. All four quadrants are checked; a single
/// claim can complete more than one.
#[instrument(skip_all, fields(claims = claims.len()))]
pub fn newly_completed(
    claims: &[Coordinate],
    credited_a: &[Quadrant],
    credited_b: &[Quadrant],
) -> Vec<Quadrant> {
    Quadrant::CANONICAL
        .into_iter()
        .filter(|quadrant| !credited_a.contains(quadrant) && !credited_b.contains(quadrant))
        .filter(|quadrant| {
            quadrant
                .control_pattern()
                .iter()
                .all(|tile| claims.contains(tile))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(u8, u8)]) -> Vec<Coordinate> {
        pairs
            .iter()
            .map(|(r, c)| Coordinate::new(*r, *c).unwrap())
            .collect()
    }

    #[test]
    fn test_no_completion_on_empty_claims() {
        assert!(newly_completed(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_partial_pattern_not_completed() {
        let claims = coords(&[(1, 1), (1, 3), (2, 2), (3, 1)]);
        assert!(newly_completed(&claims, &[], &[]).is_empty());
    }

    #[test]
    fn test_full_pattern_completes_top_left() {
        let claims = coords(&[(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)]);
        assert_eq!(newly_completed(&claims, &[], &[]), vec![Quadrant::TopLeft]);
    }

    #[test]
    fn test_non_control_tiles_do_not_count() {
        // All nine tiles of the top-left block except two control tiles.
        let claims = coords(&[(1, 1), (1, 2), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
        assert!(newly_completed(&claims, &[], &[]).is_empty());
    }

    #[test]
    fn test_bottom_left_needs_all_six_tiles() {
        let five = coords(&[(4, 1), (4, 3), (5, 1), (5, 3), (6, 1)]);
        assert!(newly_completed(&five, &[], &[]).is_empty());

        let six = coords(&[(4, 1), (4, 3), (5, 1), (5, 3), (6, 1), (6, 3)]);
        assert_eq!(newly_completed(&six, &[], &[]), vec![Quadrant::BottomLeft]);
    }

    #[test]
    fn test_already_credited_quadrant_skipped() {
        let claims = coords(&[(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)]);
        assert!(newly_completed(&claims, &[Quadrant::TopLeft], &[]).is_empty());
    }

    #[test]
    fn test_quadrant_credited_to_opponent_skipped() {
        let claims = coords(&[(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)]);
        assert!(newly_completed(&claims, &[], &[Quadrant::TopLeft]).is_empty());
    }

    #[test]
    fn test_multiple_completions_reported_in_canonical_order() {
        let claims = coords(&[
            (1, 5),
            (2, 4),
            (2, 5),
            (2, 6),
            (3, 5), // top-right pattern
            (1, 1),
            (1, 3),
            (2, 2),
            (3, 1),
            (3, 3), // top-left pattern
        ]);
        assert_eq!(
            newly_completed(&claims, &[], &[]),
            vec![Quadrant::TopLeft, Quadrant::TopRight]
        );
    }
}
