//! Board coordinates, 1-indexed as in the public contract.

use crate::action::ClaimError;
use serde::{Deserialize, Serialize};

/// A board coordinate: (row, column), both in `[1, 6]`.
///
/// The fallible constructor is the only public way to build one, so a
/// `Coordinate` held by the engine is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Smallest valid row or column.
    pub const MIN: u8 = 1;
    /// Largest valid row or column.
    pub const MAX: u8 = 6;

    /// Creates a coordinate, rejecting anything outside the 6x6 board.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::CoordinateOutOfRange`] if either component
    /// falls outside `[1, 6]`.
    pub fn new(row: u8, column: u8) -> Result<Self, ClaimError> {
        if !(Self::MIN..=Self::MAX).contains(&row) || !(Self::MIN..=Self::MAX).contains(&column) {
            return Err(ClaimError::CoordinateOutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    /// Builds a coordinate known to be in range at compile time.
    ///
    /// Used for the static control-pattern tables.
    pub(crate) const fn new_unchecked(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns the row (1-6).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (1-6).
    pub fn column(self) -> u8 {
        self.column
    }

    /// Iterates over all 36 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (Self::MIN..=Self::MAX)
            .flat_map(|row| (Self::MIN..=Self::MAX).map(move |column| Self { row, column }))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_corners() {
        assert!(Coordinate::new(1, 1).is_ok());
        assert!(Coordinate::new(6, 6).is_ok());
        assert!(Coordinate::new(1, 6).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Coordinate::new(0, 3),
            Err(ClaimError::CoordinateOutOfRange { row: 0, column: 3 })
        ));
        assert!(matches!(
            Coordinate::new(3, 7),
            Err(ClaimError::CoordinateOutOfRange { .. })
        ));
        assert!(Coordinate::new(7, 7).is_err());
    }

    #[test]
    fn test_all_covers_board_once() {
        let coords: Vec<_> = Coordinate::all().collect();
        assert_eq!(coords.len(), 36);
        let mut unique = coords.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 36);
    }
}
