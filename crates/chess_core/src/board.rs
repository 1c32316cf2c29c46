//! Chess rules adapter over `cozy-chess`.
//!
//! `cozy-chess` is copy-make: a move produces a new board. The search core
//! wants apply/undo, so [`ChessBoard`] keeps the boards it replaced on a
//! stack and pops one on every undo.

use std::str::FromStr;

use cozy_chess::{Board, Color, Move, Piece, Square};

use crate::error::ChessError;
use crate::position::{CaptureValues, Position, Side, Termination};
use crate::uci::move_to_uci;

#[derive(Clone, Debug)]
pub struct ChessBoard {
    board: Board,
    history: Vec<Board>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl ChessBoard {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::with_capacity(64),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let board = Board::from_fen(fen, false).map_err(|e| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    /// The underlying `cozy-chess` board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn color_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color, piece))
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    /// Number of moves applied and not yet undone.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Plays a move coming from outside the engine, rejecting illegal ones.
    pub fn play(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.board.is_legal(mv) {
            return Err(ChessError::IllegalMove(move_to_uci(self, mv)));
        }
        self.apply(mv);
        Ok(())
    }

    fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|_| {
            found = true;
            true
        });
        found
    }

    /// Neither side has mating material: bare kings, a single minor piece,
    /// or bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if (knights | bishops).len() <= 1 {
            return true;
        }

        knights.is_empty()
            && (bishops.into_iter().all(is_light_square)
                || bishops.into_iter().all(|sq| !is_light_square(sq)))
    }

    fn is_en_passant(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::Pawn)
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none()
    }
}

impl FromStr for ChessBoard {
    type Err = ChessError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

fn is_light_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}

/// Capture-ordering ordinal: pawn 1 up to king 6.
pub fn piece_ordinal(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 2,
        Piece::Bishop => 3,
        Piece::Rook => 4,
        Piece::Queen => 5,
        Piece::King => 6,
    }
}

impl Position for ChessBoard {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: Move) {
        self.history.push(self.board.clone());
        self.board.play_unchecked(mv);
    }

    fn undo(&mut self) {
        debug_assert!(!self.history.is_empty(), "undo without a matching apply");
        if let Some(prev) = self.history.pop() {
            self.board = prev;
        }
    }

    fn termination(&self) -> Option<Termination> {
        if !self.has_legal_moves() {
            return Some(if self.in_check() {
                Termination::Checkmate
            } else {
                Termination::Stalemate
            });
        }
        if self.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if self.board.halfmove_clock() >= 100 {
            return Some(Termination::FiftyMoveRule);
        }
        None
    }

    fn side_to_move(&self) -> Side {
        match self.board.side_to_move() {
            Color::White => Side::First,
            Color::Black => Side::Second,
        }
    }

    fn identity(&self) -> u64 {
        self.board.hash()
    }

    fn is_capture(&self, mv: Move) -> bool {
        // Castling is encoded as the king taking its own rook.
        match self.board.color_on(mv.to) {
            Some(color) => color != self.board.side_to_move(),
            None => self.is_en_passant(mv),
        }
    }

    fn capture_values(&self, mv: Move) -> Option<CaptureValues> {
        if !self.is_capture(mv) {
            return None;
        }
        let victim = self.board.piece_on(mv.to).unwrap_or(Piece::Pawn);
        let attacker = self.board.piece_on(mv.from).unwrap_or(Piece::Pawn);
        Some(CaptureValues {
            victim: piece_ordinal(victim),
            attacker: piece_ordinal(attacker),
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
