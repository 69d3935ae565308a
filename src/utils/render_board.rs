//! Terminal board renderer.
//!
//! Draws the board with file and rank labels for debugging and the playout
//! binary. Pieces use the text-board letters; markers flag spawned pieces.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team, BOARD_SIZE};
use crate::game_state::piece_instance::PieceInstance;
use crate::utils::board_text::symbol_for_profile;

/// Renders the board with rank 8 on top.
///
/// Each square is two characters: the piece letter (uppercase White,
/// lowercase Black) and a marker, `*` for an infused pawn, `+` for a
/// resurrected piece, or a space. Empty squares show `·`.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..BOARD_SIZE {
            out.push(' ');
            match Square::new(file, rank).and_then(|square| board.piece_at(square)) {
                Some(piece) => {
                    out.push(piece_letter(piece));
                    out.push(piece_marker(piece));
                }
                None => {
                    out.push('·');
                    out.push(' ');
                }
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn piece_letter(piece: &PieceInstance) -> char {
    let letter = symbol_for_profile(&piece.profile);
    match piece.team {
        Team::White => letter,
        Team::Black => letter.to_ascii_lowercase(),
    }
}

fn piece_marker(piece: &PieceInstance) -> char {
    if piece.infused {
        '*'
    } else if piece.stolen {
        '+'
    } else {
        ' '
    }
}
