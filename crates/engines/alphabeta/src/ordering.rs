//! Move ordering
//!
//! Good moves first means earlier cutoffs. Captures are ranked by
//! most-valuable-victim / least-valuable-attacker, quiet moves keep the
//! generator's order behind them, and the move the transposition table
//! remembers for this position goes in front of everything.

use std::cmp::Reverse;

use chess_core::Position;

/// Capture priority: `10 * victim - attacker`, zero for quiet moves.
#[inline]
pub fn mvv_lva<P: Position>(pos: &P, mv: P::Move) -> i32 {
    pos.capture_values(mv)
        .map_or(0, |v| 10 * v.victim - v.attacker)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOrderer {
    /// Sort by MVV-LVA. When off, the generator's order is kept.
    pub mvv_lva: bool,
}

impl Default for MoveOrderer {
    fn default() -> Self {
        Self { mvv_lva: true }
    }
}

impl MoveOrderer {
    pub fn new(mvv_lva: bool) -> Self {
        Self { mvv_lva }
    }

    /// Legal moves (or legal captures) of `pos`, best candidates first.
    ///
    /// `table_move` is promoted to the front when it is among the
    /// candidates; anything else is ignored.
    pub fn order<P: Position>(
        &self,
        pos: &P,
        captures_only: bool,
        table_move: Option<P::Move>,
    ) -> Vec<P::Move> {
        let mut moves = if captures_only {
            pos.legal_captures()
        } else {
            pos.legal_moves()
        };

        if self.mvv_lva {
            // Stable: equal priorities keep generator order.
            moves.sort_by_cached_key(|&mv| Reverse(mvv_lva(pos, mv)));
        }

        if let Some(tm) = table_move {
            if let Some(i) = moves.iter().position(|&mv| mv == tm) {
                moves[..=i].rotate_right(1);
            }
        }

        moves
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
