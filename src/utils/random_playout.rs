//! Seeded random playouts for diagnostics and property tests.
//!
//! Picks uniformly among the legal moves until the requested number of plies
//! has been played or the game ends.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::{chess_types::Move, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;

/// Play up to `plies` random legal moves on `game_state` and return them.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    plies: usize,
    rng: &mut R,
) -> Vec<Move> {
    let mut played = Vec::with_capacity(plies);

    for _ in 0..plies {
        let moves = legal_moves(game_state);
        let Some(&mv) = moves.as_slice().choose(rng) else {
            debug!("playout stopped after {} plies: no legal move", played.len());
            break;
        };
        if game_state.make_move(mv).is_err() {
            break;
        }
        played.push(mv);
    }

    played
}
