//! Error types for the rules engine.
//!
//! Two failure kinds cross the public boundary: `InvalidPosition` when a
//! position description cannot be turned into a game state, and `IllegalMove`
//! when a proposed move fails a legality predicate. Neither leaves a partially
//! built or partially mutated game state behind.

use crate::game_state::chess_types::Square;

/// A malformed position description (FEN).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPosition {
    #[error("position must have 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("piece placement must contain 8 ranks, found {0}")]
    RankCount(usize),

    /// `rank` is the board rank (1..=8), `files` how many it accounted for.
    #[error("rank {rank} accounts for {files} files instead of 8")]
    RankWidth { rank: u8, files: usize },

    #[error("invalid empty-square count '{0}'")]
    EmptyRun(char),

    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),

    #[error("more than one {0} king on the board")]
    ExtraKing(&'static str),

    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),

    #[error("invalid castling rights field: {0}")]
    CastlingRights(String),

    #[error("invalid en-passant field: {0}")]
    EnPassant(String),

    #[error("invalid halfmove clock: {0}")]
    HalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    FullmoveNumber(String),
}

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("origin and destination are the same square")]
    NullMove,

    #[error("no piece on origin square")]
    EmptyOrigin,

    #[error("piece on origin belongs to the side not to move")]
    NotSideToMove,

    #[error("destination holds a piece of the moving side")]
    OwnPieceOnDestination,

    #[error("piece cannot move that way")]
    Geometry,

    #[error("path to destination is obstructed")]
    Obstructed,

    #[error("pawn reaching the last rank must name a promotion piece")]
    MissingPromotion,

    #[error("promotion piece given for a move that does not promote")]
    UnexpectedPromotion,

    #[error("pawns may only promote to knight, bishop, rook or queen")]
    InvalidPromotionPiece,

    #[error("castling right has been lost")]
    NoCastlingRight,

    #[error("castling requires king and rook on their original squares")]
    CastlingPiecesMissing,

    #[error("king may not castle out of, through or into check")]
    CastlingThroughCheck,

    #[error("en-passant target has no capturable pawn")]
    NoEnPassantVictim,

    #[error("move leaves own king in check")]
    LeavesKingInCheck,

    #[error("move tag does not match the move")]
    TagMismatch,
}

/// Malformed long-algebraic move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveTextError {
    #[error("move text must be 4 or 5 characters, got '{0}'")]
    Length(String),

    #[error("invalid square '{0}'")]
    Square(String),

    #[error("invalid promotion letter '{0}'")]
    Promotion(char),
}
