//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string:
//! piece bitboards, side to move, castling rights, en-passant target and
//! clocks. Any malformed field yields `InvalidPosition` and no state.

use log::trace;

use crate::errors::InvalidPosition;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, InvalidPosition> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(InvalidPosition::FieldCount(fields.len()));
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square =
        parse_en_passant_square(en_passant_part, game_state.side_to_move)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| InvalidPosition::HalfmoveClock(halfmove_part.to_owned()))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| InvalidPosition::FullmoveNumber(fullmove_part.to_owned()))?;

    trace!("parsed position {fen}");
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), InvalidPosition> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(InvalidPosition::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(InvalidPosition::EmptyRun(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_symbol(ch).ok_or(InvalidPosition::UnknownPiece(ch))?;

            if file < 8 {
                game_state.put_piece(square_at(file as u8, board_rank), piece);
            }
            file += 1;
        }

        if file != 8 {
            return Err(InvalidPosition::RankWidth {
                rank: board_rank + 1,
                files: file,
            });
        }
    }

    for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
        if game_state.bitboard(color, PieceKind::King).count_ones() > 1 {
            return Err(InvalidPosition::ExtraKing(name));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, InvalidPosition> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(InvalidPosition::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, InvalidPosition> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(InvalidPosition::CastlingRights(castling_part.to_owned())),
        };
    }

    Ok(rights)
}

/// The target must sit on the square a double push by the side that just
/// moved would have skipped: rank 6 when White is to move, rank 3 otherwise.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, InvalidPosition> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .ok_or_else(|| InvalidPosition::EnPassant(en_passant_part.to_owned()))?;

    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if rank_of(square) != expected_rank {
        return Err(InvalidPosition::EnPassant(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::InvalidPosition;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.bitboard(Color::White, PieceKind::Pawn), 0xFF00);
        assert_eq!(
            game_state.bitboard(Color::Black, PieceKind::Rook),
            (1u64 << 56) | (1u64 << 63)
        );
    }

    #[test]
    fn parse_keeps_en_passant_target_and_clocks() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .expect("FEN with en-passant target should parse");

        assert_eq!(game_state.en_passant_square, Some(43));
        assert_eq!(game_state.fullmove_number, 3);
    }

    #[test]
    fn bare_kings_parse() {
        let game_state = parse_fen("8/8/8/8/8/8/8/K6k w - - 0 1").expect("bare kings should parse");
        assert_eq!(game_state.king_square(Color::White), Some(0));
        assert_eq!(game_state.king_square(Color::Black), Some(7));
        assert_eq!(game_state.castling_rights, 0);
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - - 0"),
            Err(InvalidPosition::FieldCount(5))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/K6k w - - 0 1"),
            Err(InvalidPosition::RankCount(7))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K5k w - - 0 1"),
            Err(InvalidPosition::RankWidth { rank: 1, files: 7 })
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6kp w - - 0 1"),
            Err(InvalidPosition::RankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6x w - - 0 1"),
            Err(InvalidPosition::UnknownPiece('x'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k x - - 0 1"),
            Err(InvalidPosition::SideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w KX - 0 1"),
            Err(InvalidPosition::CastlingRights("KX".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - e3 0 1"),
            Err(InvalidPosition::EnPassant("e3".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - - x 1"),
            Err(InvalidPosition::HalfmoveClock("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K5Kk w - - 0 1"),
            Err(InvalidPosition::ExtraKing("white"))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K9 w - - 0 1"),
            Err(InvalidPosition::EmptyRun('9'))
        );
    }
}
