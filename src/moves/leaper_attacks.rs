//! Precomputed attack maps for pieces that jump a fixed offset: king, knight
//! and pawn captures.
//!
//! The offset lists are also the canonical per-origin ordering used by the
//! move index tables, so their order must not change.

use crate::game_state::chess_types::{Color, Square};

/// (file, rank) deltas of the eight king neighbours, N first, clockwise.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// (file, rank) deltas of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_ATTACKS: [u64; 64] = generate_leaper_table(&KING_OFFSETS);
pub const KNIGHT_ATTACKS: [u64; 64] = generate_leaper_table(&KNIGHT_OFFSETS);

/// Squares a pawn of the given color attacks, indexed `[color][square]`.
pub const PAWN_ATTACKS: [[u64; 64]; 2] = [
    generate_leaper_table(&[(-1, 1), (1, 1)]),
    generate_leaper_table(&[(-1, -1), (1, -1)]),
];

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    PAWN_ATTACKS[color.index()][square as usize]
}

/// Square reached from `square` by a (file, rank) delta, if still on the board.
#[inline]
pub const fn offset_square(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = (square % 8) as i8 + file_delta;
    let rank = (square / 8) as i8 + rank_delta;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

const fn generate_leaper_table(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut attacks = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            if let Some(target) = offset_square(sq as Square, offsets[i].0, offsets[i].1) {
                attacks |= 1u64 << target;
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
