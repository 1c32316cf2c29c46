//! Contracts between the search core and its collaborators.
//!
//! The search never looks inside a position. Everything it needs from the
//! rules engine goes through [`Position`], and everything it needs from the
//! evaluator goes through [`Evaluator`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Signed score in centipawns, positive for the side to move.
pub type Score = i32;

/// Score of a forced checkmate. Evaluators must stay strictly below it.
pub const MATE_SCORE: Score = 1_000_000;

/// Bound of the alpha-beta window. Strictly above [`MATE_SCORE`].
pub const INFINITY: Score = 1_000_000_000;

/// Score of a drawn position.
pub const DRAW_SCORE: Score = 0;

/// Colour-agnostic player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Why a position has no continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The side to move is mated.
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
}

impl Termination {
    pub fn is_draw(self) -> bool {
        !matches!(self, Termination::Checkmate)
    }
}

/// Piece ordinals used by capture ordering (pawn lowest, king highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureValues {
    pub victim: i32,
    pub attacker: i32,
}

/// Everything the search core needs from a rules engine.
///
/// `apply` and `undo` are strictly paired: every `apply` is followed by
/// exactly one `undo` before the caller touches the position again.
///
/// `identity` must be a sound equality witness. Two positions with the same
/// placement, castling rights, en-passant target and side to move return the
/// same value, and distinct positions are assumed to return distinct values.
/// A collision is not detected by the search and may surface a table entry
/// computed for a different position.
pub trait Position {
    type Move: Copy + Eq + Debug;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Legal moves that capture a piece at the current position.
    fn legal_captures(&self) -> Vec<Self::Move> {
        self.legal_moves()
            .into_iter()
            .filter(|&mv| self.is_capture(mv))
            .collect()
    }

    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply`.
    fn undo(&mut self);

    fn termination(&self) -> Option<Termination>;

    fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    fn side_to_move(&self) -> Side;

    fn identity(&self) -> u64;

    fn is_capture(&self, mv: Self::Move) -> bool;

    /// Victim and attacker ordinals for a capture, `None` for a quiet move.
    fn capture_values(&self, mv: Self::Move) -> Option<CaptureValues>;
}

/// Static evaluation in the relative convention: positive favours the side
/// to move. Must be deterministic and free of side effects, and must stay
/// within `(-MATE_SCORE, MATE_SCORE)` except for mated positions, which may
/// return exactly `-MATE_SCORE`.
pub trait Evaluator<P: Position> {
    fn evaluate(&self, pos: &P) -> Score;
}

/// A position with one move applied, undone again when dropped.
///
/// Holding the guard is the only way the search mutates a position, so an
/// early return or a cutoff can never leave a move on the board.
pub struct Applied<'a, P: Position> {
    pos: &'a mut P,
}

impl<'a, P: Position> Applied<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.apply(mv);
        Self { pos }
    }
}

impl<P: Position> std::ops::Deref for Applied<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: Position> std::ops::DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: Position> Drop for Applied<'_, P> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}
