//! Canonical chess-rule constants.
//!
//! Starting position and the fixed squares castling depends on.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_START_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// Squares and right flag involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSpec {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub must_be_empty: u64,
    /// Square the king passes over.
    pub king_transit: Square,
}

const fn castling_spec(color: Color, kingside: bool) -> CastlingSpec {
    let rank = color.back_rank();
    let king_from = square_at(KING_START_FILE, rank);
    if kingside {
        CastlingSpec {
            right: match color {
                Color::White => CASTLE_WHITE_KINGSIDE,
                Color::Black => CASTLE_BLACK_KINGSIDE,
            },
            king_from,
            king_to: square_at(6, rank),
            rook_from: square_at(KINGSIDE_ROOK_FILE, rank),
            rook_to: square_at(5, rank),
            must_be_empty: (1u64 << square_at(5, rank)) | (1u64 << square_at(6, rank)),
            king_transit: square_at(5, rank),
        }
    } else {
        CastlingSpec {
            right: match color {
                Color::White => CASTLE_WHITE_QUEENSIDE,
                Color::Black => CASTLE_BLACK_QUEENSIDE,
            },
            king_from,
            king_to: square_at(2, rank),
            rook_from: square_at(QUEENSIDE_ROOK_FILE, rank),
            rook_to: square_at(3, rank),
            must_be_empty: (1u64 << square_at(1, rank))
                | (1u64 << square_at(2, rank))
                | (1u64 << square_at(3, rank)),
            king_transit: square_at(3, rank),
        }
    }
}

/// Indexed `[color][0 = kingside, 1 = queenside]`.
pub const CASTLING_SPECS: [[CastlingSpec; 2]; 2] = [
    [castling_spec(Color::White, true), castling_spec(Color::White, false)],
    [castling_spec(Color::Black, true), castling_spec(Color::Black, false)],
];

#[inline]
pub const fn castling_spec_for(color: Color, tag: MoveTag) -> Option<CastlingSpec> {
    match tag {
        MoveTag::CastleKingside => Some(CASTLING_SPECS[color.index()][0]),
        MoveTag::CastleQueenside => Some(CASTLING_SPECS[color.index()][1]),
        _ => None,
    }
}

/// Right lost when a piece leaves, or is captured on, a corner square.
#[inline]
pub const fn castling_right_for_corner(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}
