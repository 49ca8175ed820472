//! Core board state representation.
//!
//! `GameState` is the single mutable entity of a game. It stores one bitboard
//! per (color, piece kind), occupancy caches, turn/state flags and clocks.
//! Only the move executor mutates it after construction, and it does so by
//! building the successor on a copy and committing it whole.

use std::fmt;

use crate::errors::{IllegalMove, InvalidPosition};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::attacks::is_king_in_check;
use crate::move_generation::legality::check_move;
use crate::move_generation::move_apply::make_move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// An empty board, White to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, InvalidPosition> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Grid view of a single square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !is_on_board(square) {
            return None;
        }
        let mask = 1u64 << square;
        if self.occupancy_all & mask == 0 {
            return None;
        }
        let color = if self.occupancy_by_color[Color::White.index()] & mask != 0 {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
            .map(|kind| Piece::new(kind, color))
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.occupancy_all.count_ones()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboard(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.remove_piece(square);
        let mask = 1u64 << square;
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    /// Clear a square, returning its previous occupant.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let removed = self.piece_at(square)?;
        let mask = !(1u64 << square);
        self.pieces[removed.color.index()][removed.kind.index()] &= mask;
        self.occupancy_by_color[removed.color.index()] &= mask;
        self.occupancy_all &= mask;
        Some(removed)
    }

    /// Whether `mv` is legal for the side to move.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        check_move(self, mv).is_ok()
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Apply a legal move in place. On error the state is untouched.
    #[inline]
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        make_move(self, mv)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
