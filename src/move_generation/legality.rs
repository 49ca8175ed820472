//! Move legality predicates.
//!
//! `check_move` runs the shared preconditions, the per-kind geometry, the
//! promotion and castling conditions, and finally simulates the move on a
//! copy of the state to reject anything that leaves the mover's king
//! attacked. It returns the inferred `MoveTag` of a legal move or the first
//! reason the move failed.

use crate::errors::IllegalMove;
use crate::game_state::chess_rules::{castling_spec_for, KING_START_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::attacks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_apply::apply_unchecked;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks};
use crate::moves::slider_attacks::{
    bishop_attacks, queen_attacks, rook_attacks, BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS,
};

/// Whether `mv` is legal for the side to move.
#[inline]
pub fn is_legal(game_state: &GameState, mv: Move) -> bool {
    validate_move(game_state, mv).is_ok()
}

/// Check `mv` for the side to move, returning its classification if legal.
#[inline]
pub fn check_move(game_state: &GameState, mv: Move) -> Result<MoveTag, IllegalMove> {
    validate_move(game_state, mv).map(|(_, tag)| tag)
}

/// Like [`check_move`], also returning the moving piece.
pub(crate) fn validate_move(
    game_state: &GameState,
    mv: Move,
) -> Result<(Piece, MoveTag), IllegalMove> {
    let piece = check_shared_preconditions(game_state, mv)?;

    if let Some(promotion) = mv.promotion {
        if !promotion.is_promotion_target() {
            return Err(IllegalMove::InvalidPromotionPiece);
        }
    }

    let tag = match piece.kind {
        PieceKind::Pawn => pawn_geometry(game_state, piece.color, mv.from, mv.to)?,
        PieceKind::Knight => leaper_geometry(knight_attacks(mv.from), mv.to)?,
        PieceKind::Bishop => slider_geometry(
            BISHOP_RAYS[mv.from as usize],
            bishop_attacks(mv.from, game_state.occupancy_all),
            mv.to,
        )?,
        PieceKind::Rook => slider_geometry(
            ROOK_RAYS[mv.from as usize],
            rook_attacks(mv.from, game_state.occupancy_all),
            mv.to,
        )?,
        PieceKind::Queen => slider_geometry(
            QUEEN_RAYS[mv.from as usize],
            queen_attacks(mv.from, game_state.occupancy_all),
            mv.to,
        )?,
        PieceKind::King => king_geometry(game_state, piece.color, mv.from, mv.to)?,
    };

    let promotes = piece.kind == PieceKind::Pawn && rank_of(mv.to) == piece.color.promotion_rank();
    match (promotes, mv.promotion) {
        (true, None) => return Err(IllegalMove::MissingPromotion),
        (false, Some(_)) => return Err(IllegalMove::UnexpectedPromotion),
        _ => {}
    }

    if mv.tag.is_some_and(|requested| requested != tag) {
        return Err(IllegalMove::TagMismatch);
    }

    let mut next = game_state.clone();
    apply_unchecked(&mut next, mv, piece, tag);
    if is_king_in_check(&next, piece.color) {
        return Err(IllegalMove::LeavesKingInCheck);
    }

    Ok((piece, tag))
}

fn check_shared_preconditions(game_state: &GameState, mv: Move) -> Result<Piece, IllegalMove> {
    for square in [mv.from, mv.to] {
        if !is_on_board(square) {
            return Err(IllegalMove::OffBoard(square));
        }
    }
    if mv.from == mv.to {
        return Err(IllegalMove::NullMove);
    }

    let piece = game_state
        .piece_at(mv.from)
        .ok_or(IllegalMove::EmptyOrigin)?;
    if piece.color != game_state.side_to_move {
        return Err(IllegalMove::NotSideToMove);
    }

    let own = game_state.occupancy_by_color[piece.color.index()];
    if own & (1u64 << mv.to) != 0 {
        return Err(IllegalMove::OwnPieceOnDestination);
    }

    Ok(piece)
}

#[inline]
fn leaper_geometry(targets: u64, to: Square) -> Result<MoveTag, IllegalMove> {
    if targets & (1u64 << to) == 0 {
        return Err(IllegalMove::Geometry);
    }
    Ok(MoveTag::Normal)
}

/// `rays` is the empty-board line set, `reachable` the same lines cut at the
/// first blocker.
#[inline]
fn slider_geometry(rays: u64, reachable: u64, to: Square) -> Result<MoveTag, IllegalMove> {
    let target = 1u64 << to;
    if rays & target == 0 {
        return Err(IllegalMove::Geometry);
    }
    if reachable & target == 0 {
        return Err(IllegalMove::Obstructed);
    }
    Ok(MoveTag::Normal)
}

fn pawn_geometry(
    game_state: &GameState,
    color: Color,
    from: Square,
    to: Square,
) -> Result<MoveTag, IllegalMove> {
    let forward = color.forward();
    let file_delta = file_of(to) as i8 - file_of(from) as i8;
    let rank_delta = rank_of(to) as i8 - rank_of(from) as i8;
    let occupied = |square: Square| game_state.occupancy_all & (1u64 << square) != 0;

    match (file_delta, rank_delta) {
        (0, dr) if dr == forward => {
            if occupied(to) {
                return Err(IllegalMove::Obstructed);
            }
            Ok(MoveTag::Normal)
        }
        (0, dr) if dr == 2 * forward => {
            if rank_of(from) != color.pawn_home_rank() {
                return Err(IllegalMove::Geometry);
            }
            let skipped = square_at(file_of(from), (rank_of(from) as i8 + forward) as u8);
            if occupied(skipped) || occupied(to) {
                return Err(IllegalMove::Obstructed);
            }
            Ok(MoveTag::DoublePawnPush)
        }
        (-1 | 1, dr) if dr == forward => {
            let enemy = game_state.occupancy_by_color[color.opposite().index()];
            if enemy & (1u64 << to) != 0 {
                return Ok(MoveTag::Normal);
            }
            if game_state.en_passant_square != Some(to) || occupied(to) {
                return Err(IllegalMove::Geometry);
            }
            let victim_square = square_at(file_of(to), rank_of(from));
            let victim = Piece::new(PieceKind::Pawn, color.opposite());
            if game_state.piece_at(victim_square) != Some(victim) {
                return Err(IllegalMove::NoEnPassantVictim);
            }
            Ok(MoveTag::EnPassantCapture)
        }
        _ => Err(IllegalMove::Geometry),
    }
}

fn king_geometry(
    game_state: &GameState,
    color: Color,
    from: Square,
    to: Square,
) -> Result<MoveTag, IllegalMove> {
    if king_attacks(from) & (1u64 << to) != 0 {
        return Ok(MoveTag::Normal);
    }

    let back_rank = color.back_rank();
    if from != square_at(KING_START_FILE, back_rank) || rank_of(to) != back_rank {
        return Err(IllegalMove::Geometry);
    }
    let tag = match file_of(to) {
        6 => MoveTag::CastleKingside,
        2 => MoveTag::CastleQueenside,
        _ => return Err(IllegalMove::Geometry),
    };
    check_castling(game_state, color, tag)?;
    Ok(tag)
}

fn check_castling(game_state: &GameState, color: Color, tag: MoveTag) -> Result<(), IllegalMove> {
    let Some(castle) = castling_spec_for(color, tag) else {
        return Err(IllegalMove::Geometry);
    };

    if !game_state.has_castling_right(castle.right) {
        return Err(IllegalMove::NoCastlingRight);
    }

    let rook = Piece::new(PieceKind::Rook, color);
    let king = Piece::new(PieceKind::King, color);
    if game_state.piece_at(castle.rook_from) != Some(rook)
        || game_state.piece_at(castle.king_from) != Some(king)
    {
        return Err(IllegalMove::CastlingPiecesMissing);
    }

    if game_state.occupancy_all & castle.must_be_empty != 0 {
        return Err(IllegalMove::Obstructed);
    }

    let enemy = color.opposite();
    if [castle.king_from, castle.king_transit, castle.king_to]
        .into_iter()
        .any(|square| is_square_attacked(game_state, square, enemy))
    {
        return Err(IllegalMove::CastlingThroughCheck);
    }

    Ok(())
}
