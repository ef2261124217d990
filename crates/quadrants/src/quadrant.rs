//! The four quadrants and their control patterns.

use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

const fn coord(row: u8, column: u8) -> Coordinate {
    Coordinate::new_unchecked(row, column)
}

/// One of the four 3x3 regions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Rows 1-3, columns 1-3.
    TopLeft,
    /// Rows 4-6, columns 4-6.
    BottomRight,
    /// Rows 1-3, columns 4-6.
    TopRight,
    /// Rows 4-6, columns 1-3.
    BottomLeft,
}

impl Quadrant {
    /// All four quadrants in canonical evaluation order.
    pub const CANONICAL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomRight,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
    ];

    /// The control pattern: tiles a single player must claim to be
    /// credited this quadrant.
    ///
    /// BottomLeft has six control tiles where the others have five. The
    /// asymmetry comes from the board geometry and is deliberate.
    pub fn control_pattern(self) -> &'static [Coordinate] {
        const TOP_LEFT: &[Coordinate] = &[
            coord(1, 1),
            coord(1, 3),
            coord(2, 2),
            coord(3, 1),
            coord(3, 3),
        ];
        const BOTTOM_RIGHT: &[Coordinate] = &[
            coord(4, 4),
            coord(4, 6),
            coord(5, 5),
            coord(6, 4),
            coord(6, 6),
        ];
        const TOP_RIGHT: &[Coordinate] = &[
            coord(1, 5),
            coord(2, 4),
            coord(2, 5),
            coord(2, 6),
            coord(3, 5),
        ];
        const BOTTOM_LEFT: &[Coordinate] = &[
            coord(4, 1),
            coord(4, 3),
            coord(5, 1),
            coord(5, 3),
            coord(6, 1),
            coord(6, 3),
        ];
        match self {
            Quadrant::TopLeft => TOP_LEFT,
            Quadrant::BottomRight => BOTTOM_RIGHT,
            Quadrant::TopRight => TOP_RIGHT,
            Quadrant::BottomLeft => BOTTOM_LEFT,
        }
    }

    /// The (top-left corner) row and column range of this quadrant.
    fn origin(self) -> (u8, u8) {
        match self {
            Quadrant::TopLeft => (1, 1),
            Quadrant::BottomRight => (4, 4),
            Quadrant::TopRight => (1, 4),
            Quadrant::BottomLeft => (4, 1),
        }
    }

    /// All nine tiles of this quadrant's 3x3 display block.
    ///
    /// Credit marking covers the whole block, not just the control
    /// pattern; the marking is cosmetic and separate from claim state.
    pub fn display_block(self) -> [Coordinate; 9] {
        let (row, column) = self.origin();
        let mut block = [coord(1, 1); 9];
        for r in 0..3 {
            for c in 0..3 {
                block[r * 3 + c] = coord(row + r as u8, column + c as u8);
            }
        }
        block
    }

    /// Checks whether a coordinate lies inside this quadrant's region.
    pub fn contains(self, coordinate: Coordinate) -> bool {
        let (row, column) = self.origin();
        (row..row + 3).contains(&coordinate.row())
            && (column..column + 3).contains(&coordinate.column())
    }

    /// The diagonally-opposite quadrant.
    ///
    /// Holding both quadrants of a diagonal pair ends the game.
    pub fn diagonal_partner(self) -> Quadrant {
        match self {
            Quadrant::TopLeft => Quadrant::BottomRight,
            Quadrant::BottomRight => Quadrant::TopLeft,
            Quadrant::TopRight => Quadrant::BottomLeft,
            Quadrant::BottomLeft => Quadrant::TopRight,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Top-left",
            Quadrant::BottomRight => "Bottom-right",
            Quadrant::TopRight => "Top-right",
            Quadrant::BottomLeft => "Bottom-left",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_sizes_are_asymmetric() {
        assert_eq!(Quadrant::TopLeft.control_pattern().len(), 5);
        assert_eq!(Quadrant::BottomRight.control_pattern().len(), 5);
        assert_eq!(Quadrant::TopRight.control_pattern().len(), 5);
        assert_eq!(Quadrant::BottomLeft.control_pattern().len(), 6);
    }

    #[test]
    fn test_control_tiles_lie_inside_their_quadrant() {
        for quadrant in Quadrant::CANONICAL {
            for tile in quadrant.control_pattern() {
                assert!(quadrant.contains(*tile), "{} not in {}", tile, quadrant);
            }
        }
    }

    #[test]
    fn test_display_blocks_partition_the_board() {
        let mut covered: Vec<Coordinate> = Quadrant::CANONICAL
            .iter()
            .flat_map(|q| q.display_block())
            .collect();
        covered.sort();
        covered.dedup();
        assert_eq!(covered.len(), 36);
    }

    #[test]
    fn test_diagonal_partner_is_involutive() {
        for quadrant in Quadrant::CANONICAL {
            assert_eq!(quadrant.diagonal_partner().diagonal_partner(), quadrant);
            assert_ne!(quadrant.diagonal_partner(), quadrant);
        }
    }

    #[test]
    fn test_exactly_one_quadrant_contains_each_tile() {
        for tile in Coordinate::all() {
            let owners = Quadrant::CANONICAL
                .iter()
                .filter(|q| q.contains(tile))
                .count();
            assert_eq!(owners, 1);
        }
    }
}
