use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = game_state
        .en_passant_square
        .and_then(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state),
        side_to_move,
        generate_castling_field(game_state.castling_rights),
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|(_, letter)| letter)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}
