//! Bordered ASCII board renderer for debugging.
//!
//! Rank 8 is printed first and file a leftmost. White pieces are uppercase,
//! Black lowercase, empty squares a space:
//!
//! ```text
//! -----------------
//! |r|n|b|q|k|b|n|r|
//! ...
//! -----------------
//! ```

use crate::game_state::{chess_types::*, game_state::GameState};

const BORDER: &str = "-----------------";

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::with_capacity(19 * 10);

    out.push_str(BORDER);
    out.push('\n');

    for rank in (0..8u8).rev() {
        out.push('|');
        for file in 0..8u8 {
            let symbol = game_state
                .piece_at(square_at(file, rank))
                .map_or(' ', Piece::symbol);
            out.push(symbol);
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(BORDER);
    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn render_starting_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "-----------------");
        assert_eq!(lines[1], "|r|n|b|q|k|b|n|r|");
        assert_eq!(lines[3], "| | | | | | | | |");
        assert_eq!(lines[8], "|R|N|B|Q|K|B|N|R|");
        assert_eq!(lines[9], "-----------------");
    }
}
