//! Cursor movement for keyboard navigation over the 6x6 board.

use crossterm::event::KeyCode;
use quadrants::Coordinate;

/// Moves the cursor based on arrow keys, clamped at the board edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (mut row, mut column) = (cursor.row(), cursor.column());

    match key {
        KeyCode::Up if row > Coordinate::MIN => row -= 1,
        KeyCode::Down if row < Coordinate::MAX => row += 1,
        KeyCode::Left if column > Coordinate::MIN => column -= 1,
        KeyCode::Right if column < Coordinate::MAX => column += 1,
        _ => return cursor,
    }

    Coordinate::new(row, column).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn test_arrow_movement() {
        let cursor = coord(3, 3);
        assert_eq!(move_cursor(cursor, KeyCode::Up), coord(2, 3));
        assert_eq!(move_cursor(cursor, KeyCode::Down), coord(4, 3));
        assert_eq!(move_cursor(cursor, KeyCode::Left), coord(3, 2));
        assert_eq!(move_cursor(cursor, KeyCode::Right), coord(3, 4));
    }

    #[test]
    fn test_clamped_at_edges() {
        assert_eq!(move_cursor(coord(1, 1), KeyCode::Up), coord(1, 1));
        assert_eq!(move_cursor(coord(1, 1), KeyCode::Left), coord(1, 1));
        assert_eq!(move_cursor(coord(6, 6), KeyCode::Down), coord(6, 6));
        assert_eq!(move_cursor(coord(6, 6), KeyCode::Right), coord(6, 6));
    }

    #[test]
    fn test_other_keys_ignored() {
        let cursor = coord(2, 5);
        assert_eq!(move_cursor(cursor, KeyCode::Enter), cursor);
        assert_eq!(move_cursor(cursor, KeyCode::Char('x')), cursor);
    }
}
