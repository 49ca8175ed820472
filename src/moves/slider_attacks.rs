//! Ray tables and occupancy-aware attack maps for bishops, rooks and queens.
//!
//! An attack set includes the first occupied square along each ray, so a
//! destination is reachable without obstruction exactly when it is a member.

use crate::game_state::chess_types::Square;
use crate::moves::leaper_attacks::offset_square;

/// (file, rank) steps of the eight ray directions: N, NE, E, SE, S, SW, W, NW.
pub const RAY_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Empty-board diagonal rays.
pub const BISHOP_RAYS: [u64; 64] = generate_rays(&DIAGONAL_DIRECTIONS);
/// Empty-board orthogonal rays.
pub const ROOK_RAYS: [u64; 64] = generate_rays(&ORTHOGONAL_DIRECTIONS);
pub const QUEEN_RAYS: [u64; 64] = generate_rays(&RAY_DIRECTIONS);

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = offset_square(current, file_step, rank_step) {
        let bit = 1u64 << next;
        attacks |= bit;
        if (occupancy & bit) != 0 {
            break;
        }
        current = next;
    }

    attacks
}

const fn generate_rays(directions: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut d = 0usize;
        while d < directions.len() {
            let mut current = sq as Square;
            while let Some(next) = offset_square(current, directions[d].0, directions[d].1) {
                rays |= 1u64 << next;
                current = next;
            }
            d += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_counts_from_d4() {
        let d4 = 27usize;
        assert_eq!(BISHOP_RAYS[d4].count_ones(), 13);
        assert_eq!(ROOK_RAYS[d4].count_ones(), 14);
        assert_eq!(QUEEN_RAYS[d4].count_ones(), 27);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }

    #[test]
    fn queen_attacks_are_union_of_lines() {
        let d4 = 27u8;
        let blockers = (1u64 << 43) | (1u64 << 30);
        let attacks = queen_attacks(d4, blockers);

        assert_ne!(attacks & (1u64 << 43), 0);
        assert_ne!(attacks & (1u64 << 30), 0);
        assert_eq!(attacks & (1u64 << 51), 0);
        assert_eq!(attacks & (1u64 << 31), 0);
    }
}
