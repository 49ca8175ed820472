//! Crate root module declarations for the chess rules engine.
//!
//! The engine holds an authoritative board state, answers legality queries,
//! applies legal moves, and exposes two fixed-shape encodings for an external
//! model: a legality mask over a constant move index space and a 16-plane
//! position tensor.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod slider_attacks;
}

pub mod move_generation {
    pub mod attacks;
    pub mod legal_move_generator;
    pub mod legal_move_mask;
    pub mod legality;
    pub mod move_apply;
    pub mod move_index;
    pub mod perft;
}

pub mod encoding {
    pub mod position_tensor;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use errors::{IllegalMove, InvalidPosition, MoveTextError};
pub use game_state::chess_types::{Color, Move, MoveTag, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
