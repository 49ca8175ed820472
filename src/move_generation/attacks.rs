//! Attacked-square queries.
//!
//! These reuse the same attack tables the legality checker uses for piece
//! geometry, looked up from the target square: a square is attacked by a
//! knight if a knight of the attacking color stands a knight jump away, and
//! so on for each kind.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    attackers_to_square(game_state, square, attacker_color) != 0
}

/// Bitboard of `attacker_color` pieces attacking `square`.
pub fn attackers_to_square(game_state: &GameState, square: Square, attacker_color: Color) -> u64 {
    let pieces = &game_state.pieces[attacker_color.index()];
    let occupancy = game_state.occupancy_all;

    // A pawn of `attacker_color` attacks `square` exactly when a pawn of the
    // other color on `square` would attack it back.
    let pawns = pawn_attacks(attacker_color.opposite(), square) & pieces[PieceKind::Pawn.index()];
    let knights = knight_attacks(square) & pieces[PieceKind::Knight.index()];
    let kings = king_attacks(square) & pieces[PieceKind::King.index()];
    let diagonal = bishop_attacks(square, occupancy)
        & (pieces[PieceKind::Bishop.index()] | pieces[PieceKind::Queen.index()]);
    let orthogonal = rook_attacks(square, occupancy)
        & (pieces[PieceKind::Rook.index()] | pieces[PieceKind::Queen.index()]);

    pawns | knights | kings | diagonal | orthogonal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_kings_are_not_in_check() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
        assert_eq!(attackers_to_square(&game, 4, Color::Black), 1u64 << 60);
    }

    #[test]
    fn blocked_rook_does_not_give_check() {
        let game = GameState::from_fen("4r2k/8/8/8/4N3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::White));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        // Black pawn on d2 attacks e1 and c1.
        let game = GameState::from_fen("7k/8/8/8/8/8/3p4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
        // White pawn on d2 does not attack e1.
        assert!(!is_square_attacked(&game, 4, Color::White));
        // Black pawn on e2 (straight ahead) does not attack e1.
        let game = GameState::from_fen("7k/8/8/8/8/8/4p3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::White));
    }

    #[test]
    fn knight_and_bishop_attacks_are_detected() {
        let game = GameState::from_fen("7k/8/8/8/8/5n2/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));

        let game = GameState::from_fen("7k/8/8/b7/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let game = GameState::from_fen("4r3/8/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::White));
    }
}
