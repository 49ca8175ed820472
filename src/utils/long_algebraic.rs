//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing is purely syntactic: the resulting `Move` carries no tag, and
//! legality is left to the checker.

use crate::errors::MoveTextError;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_long_algebraic(text: &str) -> Result<Move, MoveTextError> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(MoveTextError::Length(text.to_owned()));
    }

    let square = |part: &str| {
        algebraic_to_square(part).ok_or_else(|| MoveTextError::Square(part.to_owned()))
    };
    let mv = Move::new(square(&text[0..2])?, square(&text[2..4])?);

    match text[4..].chars().next() {
        None => Ok(mv),
        Some(letter) => {
            let kind = PieceKind::from_letter(letter)
                .filter(|kind| kind.is_promotion_target())
                .ok_or(MoveTextError::Promotion(letter))?;
            Ok(mv.with_promotion(kind))
        }
    }
}

pub fn format_long_algebraic(mv: Move) -> Option<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    if let Some(kind) = mv.promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    Some(out)
}
