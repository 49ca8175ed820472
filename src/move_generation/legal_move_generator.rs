//! Legal move listing and derived game status.
//!
//! Candidates come from the fixed transition table: every legal move's
//! (origin, destination) pair is a member, so filtering the side to move's
//! blocks through the legality checker yields exactly the legal moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legality::check_move;
use crate::move_generation::move_index::transitions_from;

/// Whether the game continues, and if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Every legal move for the side to move, tagged with its classification.
///
/// Promotions appear once per promotion kind.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for_each_legal_move(game_state, |mv| {
        out.push(mv);
        true
    });
    out
}

pub fn has_legal_move(game_state: &GameState) -> bool {
    let mut found = false;
    for_each_legal_move(game_state, |_| {
        found = true;
        false
    });
    found
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    if has_legal_move(game_state) {
        GameStatus::Ongoing
    } else if game_state.is_in_check(game_state.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

/// The move used to test a transition: pawn moves onto the last rank carry a
/// queen promotion, since legality does not depend on the promotion kind.
pub(crate) fn representative_move(game_state: &GameState, from: Square, to: Square) -> Move {
    let mv = Move::new(from, to);
    match game_state.piece_at(from) {
        Some(Piece {
            kind: PieceKind::Pawn,
            color,
        }) if rank_of(to) == color.promotion_rank() => mv.with_promotion(PieceKind::Queen),
        _ => mv,
    }
}

/// Calls `visit` for each legal move until it returns `false`.
fn for_each_legal_move(game_state: &GameState, mut visit: impl FnMut(Move) -> bool) {
    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];

    while own != 0 {
        let origin = own.trailing_zeros() as Square;
        own &= own - 1;

        let (_, block) = transitions_from(origin);
        for &(from, to) in block {
            let candidate = representative_move(game_state, from, to);
            let Ok(tag) = check_move(game_state, candidate) else {
                continue;
            };

            if candidate.promotion.is_some() {
                for kind in PieceKind::PROMOTIONS {
                    if !visit(Move::new(from, to).with_promotion(kind).with_tag(tag)) {
                        return;
                    }
                }
            } else if !visit(candidate.with_tag(tag)) {
                return;
            }
        }
    }
}
