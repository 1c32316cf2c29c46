//! Negamax search with alpha-beta pruning and quiescence
//!
//! Scores are relative: every node maximises for its own side to move and
//! the parent negates. The main search is fail-soft, quiescence is
//! fail-hard.

use chess_core::{Applied, Evaluator, Position, Score, INFINITY};

use crate::tt::{Bound, Entry};
use crate::AlphaBetaEngine;

impl<P: Position, E: Evaluator<P>> AlphaBetaEngine<P, E> {
    /// Searches `pos` to `depth` plies inside the `(alpha, beta)` window.
    ///
    /// Returns the node value and the move that produced it. Leaves, nodes
    /// cut short by the deadline and table hits without a move return
    /// `None` for the move.
    pub(crate) fn negamax(
        &mut self,
        pos: &mut P,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        ply: u8,
    ) -> (Score, Option<P::Move>) {
        self.nodes += 1;

        // The root always expands, so even an expired deadline yields a move.
        if ply > 0 && self.deadline.is_expired() {
            self.stopped = true;
            return (self.evaluator.evaluate(pos), None);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let key = pos.identity();
        let mut table_move = None;

        if let Some(entry) = self.table.as_ref().and_then(|tt| tt.probe(key)) {
            table_move = entry.best_move;
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return (entry.score, entry.best_move),
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return (entry.score, entry.best_move);
                }
            }
        }

        // Game over: the evaluator scores it, there is nothing to resolve.
        if pos.is_terminal() {
            return (self.evaluator.evaluate(pos), None);
        }

        if depth == 0 {
            let score = if self.config.use_quiescence {
                self.quiesce(pos, alpha, beta, 0)
            } else {
                self.evaluator.evaluate(pos)
            };
            return (score, None);
        }

        let moves = self.orderer.order(pos, false, table_move);

        let mut best_value = -INFINITY;
        let mut best_move = None;

        for mv in moves {
            let (child_value, _) = {
                let mut child = Applied::new(pos, mv);
                self.negamax(&mut child, depth - 1, -beta, -alpha, ply + 1)
            };
            let value = -child_value;

            if value > best_value || best_move.is_none() {
                best_value = value;
                best_move = Some(mv);
            }
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        // Values computed after the deadline are not worth their depth.
        if !self.stopped {
            if let Some(tt) = self.table.as_mut() {
                let bound = if best_value <= alpha_orig {
                    Bound::Upper
                } else if best_value >= beta_orig {
                    Bound::Lower
                } else {
                    Bound::Exact
                };
                tt.store(Entry {
                    key,
                    depth,
                    bound,
                    score: best_value,
                    best_move,
                });
            }
        }

        (best_value, best_move)
    }

    /// Capture-only search from a horizon node. The result always lies in
    /// `[alpha, beta]`. An expired deadline returns the clamped stand-pat.
    pub(crate) fn quiesce(&mut self, pos: &mut P, mut alpha: Score, beta: Score, qply: u8) -> Score {
        self.nodes += 1;

        let stand_pat = self.evaluator.evaluate(pos);

        if self.deadline.is_expired() {
            self.stopped = true;
            return stand_pat.max(alpha).min(beta);
        }
        // Drawn positions can still have captures on the board.
        if qply >= self.config.quiescence_max_ply || pos.is_terminal() {
            return stand_pat.max(alpha).min(beta);
        }

        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        for mv in self.orderer.order(pos, true, None) {
            let score = {
                let mut child = Applied::new(pos, mv);
                -self.quiesce(&mut child, -beta, -alpha, qply + 1)
            };

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
