//! Square conversions for algebraic coordinates (`e4` ↔ 28).

use crate::game_state::chess_types::{is_on_board, Square};

/// Convert an algebraic coordinate such as "e4" to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its algebraic coordinate.
#[inline]
pub fn square_to_algebraic(square: Square) -> Option<String> {
    if !is_on_board(square) {
        return None;
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Some(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn corner_and_center_squares_convert() {
        assert_eq!(algebraic_to_square("a1"), Some(0));
        assert_eq!(algebraic_to_square("h8"), Some(63));
        assert_eq!(algebraic_to_square("e4"), Some(28));
        assert_eq!(square_to_algebraic(0).as_deref(), Some("a1"));
        assert_eq!(square_to_algebraic(63).as_deref(), Some("h8"));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        assert_eq!(algebraic_to_square("i1"), None);
        assert_eq!(algebraic_to_square("a9"), None);
        assert_eq!(algebraic_to_square("e"), None);
        assert_eq!(algebraic_to_square("e44"), None);
        assert_eq!(square_to_algebraic(64), None);
    }
}
