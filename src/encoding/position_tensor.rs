//! Multi-plane position encoding for the move-selection model.
//!
//! 16 planes of 8×8, stored `[plane][rank][file]` with rank 0 = rank 1 and
//! file 0 = file a:
//!
//! | plane | content                  |
//! |-------|--------------------------|
//! | 0, 1  | white / black pawns      |
//! | 2, 3  | white / black rooks      |
//! | 4, 5  | white / black knights    |
//! | 6, 7  | white / black bishops    |
//! | 8, 9  | white / black queens     |
//! | 10, 11| white / black kings      |
//! | 12    | white kingside right     |
//! | 13    | white queenside right    |
//! | 14    | black kingside right     |
//! | 15    | black queenside right    |
//!
//! Rights planes are constant (all 0.0 or all 1.0). The en-passant target is
//! not encoded.

use crate::game_state::{chess_types::*, game_state::GameState};

pub const PLANE_COUNT: usize = 16;
pub const OCCUPANCY_PLANES: usize = 12;

/// Plane order of the occupancy planes, indexed by plane number.
pub const PLANE_PIECES: [Piece; OCCUPANCY_PLANES] = [
    Piece::new(PieceKind::Pawn, Color::White),
    Piece::new(PieceKind::Pawn, Color::Black),
    Piece::new(PieceKind::Rook, Color::White),
    Piece::new(PieceKind::Rook, Color::Black),
    Piece::new(PieceKind::Knight, Color::White),
    Piece::new(PieceKind::Knight, Color::Black),
    Piece::new(PieceKind::Bishop, Color::White),
    Piece::new(PieceKind::Bishop, Color::Black),
    Piece::new(PieceKind::Queen, Color::White),
    Piece::new(PieceKind::Queen, Color::Black),
    Piece::new(PieceKind::King, Color::White),
    Piece::new(PieceKind::King, Color::Black),
];

/// Right flag broadcast by each of the planes 12..16.
pub const PLANE_RIGHTS: [CastlingRights; PLANE_COUNT - OCCUPANCY_PLANES] = [
    CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
    CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE,
];

pub type Plane = [[f32; 8]; 8];

#[derive(Debug, Clone, PartialEq)]
pub struct PositionTensor {
    pub planes: [Plane; PLANE_COUNT],
}

impl PositionTensor {
    #[inline]
    pub fn plane(&self, index: usize) -> Option<&Plane> {
        self.planes.get(index)
    }

    /// Plane-major flattening: `plane * 64 + rank * 8 + file`.
    pub fn to_flat_vec(&self) -> Vec<f32> {
        self.planes
            .iter()
            .flat_map(|plane| plane.iter().flatten().copied())
            .collect()
    }
}

/// Plane holding a given piece.
#[inline]
pub const fn plane_index(piece: Piece) -> usize {
    let kind_base = match piece.kind {
        PieceKind::Pawn => 0,
        PieceKind::Rook => 2,
        PieceKind::Knight => 4,
        PieceKind::Bishop => 6,
        PieceKind::Queen => 8,
        PieceKind::King => 10,
    };
    kind_base + piece.color.index()
}

pub fn encode(game_state: &GameState) -> PositionTensor {
    let mut planes = [[[0.0f32; 8]; 8]; PLANE_COUNT];

    for (plane, piece) in planes.iter_mut().zip(PLANE_PIECES) {
        let mut bits = game_state.bitboard(piece.color, piece.kind);
        while bits != 0 {
            let square = bits.trailing_zeros() as Square;
            plane[rank_of(square) as usize][file_of(square) as usize] = 1.0;
            bits &= bits - 1;
        }
    }

    for (plane, right) in planes[OCCUPANCY_PLANES..].iter_mut().zip(PLANE_RIGHTS) {
        if game_state.has_castling_right(right) {
            *plane = [[1.0; 8]; 8];
        }
    }

    PositionTensor { planes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_sum(plane: &Plane) -> f32 {
        plane.iter().flatten().sum()
    }

    #[test]
    fn plane_order_matches_lookup() {
        for (index, piece) in PLANE_PIECES.iter().enumerate() {
            assert_eq!(plane_index(*piece), index);
        }
    }

    #[test]
    fn starting_position_planes() {
        let tensor = encode(&GameState::new_game());

        assert_eq!(plane_sum(&tensor.planes[0]), 8.0);
        assert_eq!(tensor.planes[0][1], [1.0; 8]);
        assert_eq!(tensor.planes[1][6], [1.0; 8]);
        assert_eq!(tensor.planes[2][0][0], 1.0);
        assert_eq!(tensor.planes[2][0][7], 1.0);
        assert_eq!(tensor.planes[10][0][4], 1.0);
        assert_eq!(tensor.planes[11][7][4], 1.0);
        assert_eq!(plane_sum(&tensor.planes[9]), 1.0);
        for rights_plane in &tensor.planes[OCCUPANCY_PLANES..] {
            assert_eq!(plane_sum(rights_plane), 64.0);
        }
    }

    #[test]
    fn rights_planes_follow_flags_and_ignore_en_passant() {
        let with_target = GameState::from_fen("4k2r/8/8/3pP3/8/8/8/R3K3 w Qk d6 0 2")
            .expect("FEN should parse");
        let without_target = GameState::from_fen("4k2r/8/8/3pP3/8/8/8/R3K3 w Qk - 0 2")
            .expect("FEN should parse");

        let tensor = encode(&with_target);
        assert_eq!(tensor, encode(&without_target));

        assert_eq!(plane_sum(&tensor.planes[12]), 0.0);
        assert_eq!(plane_sum(&tensor.planes[13]), 64.0);
        assert_eq!(plane_sum(&tensor.planes[14]), 64.0);
        assert_eq!(plane_sum(&tensor.planes[15]), 0.0);
        assert_eq!(tensor.to_flat_vec().len(), PLANE_COUNT * 64);
        assert_eq!(tensor.to_flat_vec()[4 * 8 + 4], 1.0);
    }
}
