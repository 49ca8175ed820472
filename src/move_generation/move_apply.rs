//! Move executor.
//!
//! `make_move` validates a move and then commits the full state transition:
//! relocation, capture, promotion, castling rook, en-passant target, castling
//! rights, clocks and turn. A rejected move leaves the state untouched.

use log::debug;

use crate::errors::IllegalMove;
use crate::game_state::chess_rules::{
    castling_right_for_corner, castling_rights_of, castling_spec_for,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legality::validate_move;

/// Apply `mv` to `game_state` if it is legal.
pub fn make_move(game_state: &mut GameState, mv: Move) -> Result<(), IllegalMove> {
    let (piece, tag) = validate_move(game_state, mv).inspect_err(|reason| {
        debug!("rejected {}->{}: {reason}", mv.from, mv.to);
    })?;

    apply_unchecked(game_state, mv, piece, tag);
    debug!("applied {:?} {}->{} ({tag:?})", piece.kind, mv.from, mv.to);
    Ok(())
}

/// Perform the state transition for an already classified move.
///
/// `piece` must be the occupant of `mv.from` and `tag` the classification the
/// legality checker produced; no legality is re-checked here.
pub(crate) fn apply_unchecked(game_state: &mut GameState, mv: Move, piece: Piece, tag: MoveTag) {
    let mover = piece.color;

    game_state.remove_piece(mv.from);

    let captured = match tag {
        MoveTag::EnPassantCapture => {
            game_state.remove_piece(square_at(file_of(mv.to), rank_of(mv.from)))
        }
        _ => game_state.remove_piece(mv.to),
    };

    let placed_kind = mv.promotion.unwrap_or(piece.kind);
    game_state.put_piece(mv.to, Piece::new(placed_kind, mover));

    if let Some(castle) = castling_spec_for(mover, tag) {
        if let Some(rook) = game_state.remove_piece(castle.rook_from) {
            game_state.put_piece(castle.rook_to, rook);
        }
    }

    if piece.kind == PieceKind::King {
        game_state.castling_rights &= !castling_rights_of(mover);
    }
    game_state.castling_rights &=
        !(castling_right_for_corner(mv.from) | castling_right_for_corner(mv.to));

    game_state.en_passant_square = match tag {
        MoveTag::DoublePawnPush => Some(square_at(
            file_of(mv.from),
            (rank_of(mv.from) + rank_of(mv.to)) / 2,
        )),
        _ => None,
    };

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
}
