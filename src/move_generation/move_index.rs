//! Fixed index space of (color, origin, destination) transitions.
//!
//! For every origin square in raster order (a1, b1, .., h1, a2, .., h8) the
//! table lists each destination a queen or a knight could reach on an empty
//! board. King steps and pawn pushes/captures are subsets of the queen lines,
//! so every chess move maps onto one entry. Within an origin the order is the
//! eight ray directions N, NE, E, SE, S, SW, W, NW, each by increasing
//! distance, followed by the eight knight jumps in `KNIGHT_OFFSETS` order.
//!
//! That gives 1792 transitions. The legality mask repeats them twice, White's
//! half first, so a flat index identifies color, origin and destination. All
//! tables are evaluated at compile time; nothing here is ever rebuilt.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::leaper_attacks::{offset_square, KNIGHT_OFFSETS};
use crate::moves::slider_attacks::RAY_DIRECTIONS;

pub const MOVES_PER_COLOR: usize = 1792;
pub const LEGALITY_MASK_LEN: usize = 2 * MOVES_PER_COLOR;

/// Sentinel in [`SQUARES_TO_INDEX`] for pairs outside the index space.
pub const NO_INDEX: u16 = u16::MAX;

/// (origin, destination) for each index of one color half.
pub static INDEX_TO_SQUARES: [(Square, Square); MOVES_PER_COLOR] = build_index_table();

/// First index of each origin's block; entry 64 is the total.
pub static ORIGIN_OFFSETS: [u16; 65] = build_origin_offsets();

/// Reverse lookup `[origin][destination]` into one color half.
pub static SQUARES_TO_INDEX: [[u16; 64]; 64] = build_reverse_table();

/// Flat mask index for a transition, if it is in the index space.
#[inline]
pub fn move_index(color: Color, from: Square, to: Square) -> Option<usize> {
    if from >= 64 || to >= 64 {
        return None;
    }
    match SQUARES_TO_INDEX[from as usize][to as usize] {
        NO_INDEX => None,
        local => Some(color.index() * MOVES_PER_COLOR + local as usize),
    }
}

/// Inverse of [`move_index`].
#[inline]
pub fn index_to_transition(index: usize) -> Option<(Color, Square, Square)> {
    if index >= LEGALITY_MASK_LEN {
        return None;
    }
    let color = if index < MOVES_PER_COLOR {
        Color::White
    } else {
        Color::Black
    };
    let (from, to) = INDEX_TO_SQUARES[index % MOVES_PER_COLOR];
    Some((color, from, to))
}

/// All transitions leaving `origin`, with the local index of the first one.
#[inline]
pub fn transitions_from(origin: Square) -> (usize, &'static [(Square, Square)]) {
    let start = ORIGIN_OFFSETS[origin as usize] as usize;
    let end = ORIGIN_OFFSETS[origin as usize + 1] as usize;
    (start, &INDEX_TO_SQUARES[start..end])
}

const fn build_index_table() -> [(Square, Square); MOVES_PER_COLOR] {
    let mut table = [(0u8, 0u8); MOVES_PER_COLOR];
    let mut count = 0usize;
    let mut origin = 0u8;

    while origin < 64 {
        let mut d = 0usize;
        while d < RAY_DIRECTIONS.len() {
            let mut current = origin;
            while let Some(next) = offset_square(current, RAY_DIRECTIONS[d].0, RAY_DIRECTIONS[d].1)
            {
                table[count] = (origin, next);
                count += 1;
                current = next;
            }
            d += 1;
        }

        let mut k = 0usize;
        while k < KNIGHT_OFFSETS.len() {
            if let Some(target) = offset_square(origin, KNIGHT_OFFSETS[k].0, KNIGHT_OFFSETS[k].1) {
                table[count] = (origin, target);
                count += 1;
            }
            k += 1;
        }

        origin += 1;
    }

    assert!(count == MOVES_PER_COLOR);
    table
}

const fn build_origin_offsets() -> [u16; 65] {
    let table = build_index_table();
    let mut offsets = [0u16; 65];
    let mut i = 0usize;

    while i < MOVES_PER_COLOR {
        offsets[table[i].0 as usize + 1] += 1;
        i += 1;
    }

    let mut sq = 1usize;
    while sq < 65 {
        offsets[sq] += offsets[sq - 1];
        sq += 1;
    }

    offsets
}

const fn build_reverse_table() -> [[u16; 64]; 64] {
    let table = build_index_table();
    let mut reverse = [[NO_INDEX; 64]; 64];
    let mut i = 0usize;

    while i < MOVES_PER_COLOR {
        let (from, to) = table[i];
        reverse[from as usize][to as usize] = i as u16;
        i += 1;
    }

    reverse
}
