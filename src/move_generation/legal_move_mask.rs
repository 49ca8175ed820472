//! Fixed-length legality mask over the move index space.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::representative_move;
use crate::move_generation::legality::is_legal;
use crate::move_generation::move_index::{
    index_to_transition, transitions_from, LEGALITY_MASK_LEN, MOVES_PER_COLOR,
};

/// One flag per index of the legality index space.
///
/// Only the half of the side to move can contain set entries. Castling sets
/// the king's two-file transition, and promotions set the pawn transition
/// once regardless of the promotion kind.
#[derive(Clone, PartialEq, Eq)]
pub struct LegalMoveMask {
    bits: [bool; LEGALITY_MASK_LEN],
}

impl LegalMoveMask {
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Set indices in ascending order.
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(index, &bit)| bit.then_some(index))
    }

    /// Set entries decoded back to (color, origin, destination).
    pub fn transitions(&self) -> impl Iterator<Item = (Color, Square, Square)> + '_ {
        self.iter_set().filter_map(index_to_transition)
    }

    /// The mask as 0.0 / 1.0 values, for model input.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.bits.iter().map(|&bit| f32::from(u8::from(bit))).collect()
    }
}

impl std::fmt::Debug for LegalMoveMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegalMoveMask")
            .field("set", &self.iter_set().collect::<Vec<_>>())
            .finish()
    }
}

/// Build the legality mask for the side to move.
pub fn enumerate(game_state: &GameState) -> LegalMoveMask {
    let mut bits = [false; LEGALITY_MASK_LEN];
    let side = game_state.side_to_move;
    let half = side.index() * MOVES_PER_COLOR;
    let mut own = game_state.occupancy_by_color[side.index()];

    while own != 0 {
        let origin = own.trailing_zeros() as Square;
        own &= own - 1;

        let (start, block) = transitions_from(origin);
        for (offset, &(from, to)) in block.iter().enumerate() {
            if is_legal(game_state, representative_move(game_state, from, to)) {
                bits[half + start + offset] = true;
            }
        }
    }

    LegalMoveMask { bits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::move_generation::move_index::move_index;

    #[test]
    fn starting_position_sets_twenty_white_entries() {
        let mask = enumerate(&GameState::new_game());
        assert_eq!(mask.count(), 20);
        assert!(mask.iter_set().all(|index| index < MOVES_PER_COLOR));

        let e2e4 = move_index(Color::White, 12, 28).expect("e2e4 is indexed");
        assert!(mask.is_set(e2e4));
        let e2e5 = move_index(Color::White, 12, 36).expect("e2e5 is indexed");
        assert!(!mask.is_set(e2e5));
    }

    #[test]
    fn black_to_move_uses_second_half() {
        let mut game = GameState::new_game();
        game.make_move(Move::new(12, 28)).expect("e2e4 should be legal");

        let mask = enumerate(&game);
        assert_eq!(mask.count(), 20);
        assert!(mask.iter_set().all(|index| index >= MOVES_PER_COLOR));
        assert!(mask
            .transitions()
            .all(|(color, from, _)| color == Color::Black && from >= 48));
    }

    #[test]
    fn castling_and_promotion_fold_onto_plain_transitions() {
        let game = GameState::from_fen("r3k3/1P6/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        let mask = enumerate(&game);

        let castle = move_index(Color::White, 4, 6).expect("e1g1 is indexed");
        assert!(mask.is_set(castle));
        let promote = move_index(Color::White, 49, 57).expect("b7b8 is indexed");
        assert!(mask.is_set(promote));
        let capture_promote = move_index(Color::White, 49, 56).expect("b7a8 is indexed");
        assert!(mask.is_set(capture_promote));

        // Promotions contribute four moves each but one mask entry.
        let moves = legal_moves(&game);
        let promotions = moves.iter().filter(|mv| mv.promotion.is_some()).count();
        assert_eq!(promotions, 8);
        assert_eq!(mask.count(), moves.len() - promotions + 2);
    }

    #[test]
    fn mask_is_reproducible() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let first = enumerate(&game);
        let second = enumerate(&game.clone());
        assert_eq!(first, second);
        assert_eq!(first.count(), 48);
        assert_eq!(first.to_f32_vec().len(), LEGALITY_MASK_LEN);
    }
}
