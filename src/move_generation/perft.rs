use std::thread;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`, classifying the
/// move that reached each leaf.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(game_state, depth, &mut total);
    total
}

/// Same as [`perft`], with one scoped worker per root move. Each worker owns
/// its own copy of the position.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut child = game_state.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    if child.make_move(mv).is_ok() {
                        perft_recurse(&child, depth - 1, &mut local);
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse(game_state: &GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(game_state) {
        let mut child = game_state.clone();
        if child.make_move(mv).is_err() {
            continue;
        }

        if depth > 1 {
            perft_recurse(&child, depth - 1, counts);
            continue;
        }

        counts.nodes += 1;
        if game_state.piece_count() > child.piece_count() {
            counts.captures += 1;
        }
        match mv.tag {
            Some(MoveTag::EnPassantCapture) => counts.en_passant += 1,
            Some(MoveTag::CastleKingside | MoveTag::CastleQueenside) => counts.castles += 1,
            _ => {}
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if child.is_in_check(child.side_to_move) {
            counts.checks += 1;
            if !has_legal_move(&child) {
                counts.checkmates += 1;
            }
        }
    }
}
