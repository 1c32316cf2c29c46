//! Static evaluators for chess positions.
//!
//! Both compute a White-minus-Black balance and convert it to the side to
//! move's perspective, which is the convention the search works in.

use chess_core::{
    ChessBoard, Color, Evaluator, Piece, Position, Score, Square, Termination, DRAW_SCORE,
    MATE_SCORE,
};

/// Bonus for each piece standing on one of the four centre squares.
pub const CENTER_BONUS: Score = 20;

const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20_000,
    }
}

/// Material balance in centipawns, positive when White is ahead.
pub fn material_balance(pos: &ChessBoard) -> Score {
    let board = pos.board();
    let mut score = 0;
    for piece in Piece::ALL {
        let white = (board.colors(Color::White) & board.pieces(piece)).len() as Score;
        let black = (board.colors(Color::Black) & board.pieces(piece)).len() as Score;
        score += piece_value(piece) * (white - black);
    }
    score
}

#[inline]
fn relative(pos: &ChessBoard, white_score: Score) -> Score {
    if pos.color_to_move() == Color::White {
        white_score
    } else {
        -white_score
    }
}

/// Material only. Does not look at mate or draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator<ChessBoard> for MaterialEvaluator {
    fn evaluate(&self, pos: &ChessBoard) -> Score {
        relative(pos, material_balance(pos))
    }
}

/// Material plus centre control, with mate and draw detection.
///
/// A mated side to move scores `-MATE_SCORE`, any drawn termination scores
/// zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalEvaluator;

impl Evaluator<ChessBoard> for PositionalEvaluator {
    fn evaluate(&self, pos: &ChessBoard) -> Score {
        match pos.termination() {
            Some(Termination::Checkmate) => return -MATE_SCORE,
            Some(_) => return DRAW_SCORE,
            None => {}
        }

        let mut score = material_balance(pos);
        for sq in CENTER {
            match pos.piece_at(sq) {
                Some((Color::White, _)) => score += CENTER_BONUS,
                Some((Color::Black, _)) => score -= CENTER_BONUS,
                None => {}
            }
        }
        relative(pos, score)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
