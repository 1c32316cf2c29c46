use cozy_chess::{File, Move, Piece, Square};

use crate::board::ChessBoard;
use crate::error::ChessError;
use crate::position::Position;

/// Formats a move in standard UCI notation.
///
/// `cozy-chess` encodes castling as the king capturing its own rook
/// (`e1h1`); UCI expects the king's destination (`e1g1`).
pub fn move_to_uci(pos: &ChessBoard, mv: Move) -> String {
    let to = if is_castle(pos, mv) {
        let file = if mv.to.file() as u8 > mv.from.file() as u8 {
            File::G
        } else {
            File::C
        };
        Square::new(file, mv.from.rank())
    } else {
        mv.to
    };

    let mut s = format!("{}{}", mv.from, to);
    if let Some(p) = mv.promotion {
        let ch = match p {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Parses UCI text into the matching legal move.
///
/// Matching against the legal move list takes care of the castling
/// encoding and rejects moves that are well-formed but illegal.
pub fn parse_uci_move(pos: &ChessBoard, txt: &str) -> Result<Move, ChessError> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(ChessError::InvalidMove(txt.to_string()));
    }
    let lowered = txt.to_ascii_lowercase();
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == lowered)
        .ok_or_else(|| ChessError::IllegalMove(txt.to_string()))
}

fn is_castle(pos: &ChessBoard, mv: Move) -> bool {
    matches!(
        (pos.piece_at(mv.from), pos.piece_at(mv.to)),
        (Some((c1, Piece::King)), Some((c2, Piece::Rook))) if c1 == c2
    )
}
