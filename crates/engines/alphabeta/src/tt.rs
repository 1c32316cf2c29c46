//! Transposition table
//!
//! A fixed number of slots indexed by `key % capacity`. Each slot keeps the
//! full key, so two positions sharing a slot never read each other's entry:
//! an index collision costs a lookup (a false negative), it never returns a
//! result for the wrong position.
//!
//! Entries are trusted only for queries at a depth no greater than the one
//! they were searched to; the search enforces that when it probes.

use chess_core::Score;
use serde::{Deserialize, Serialize};

/// What a stored score says about the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The score is the minimax value.
    Exact,
    /// Fail-high: the true value is at least the score.
    Lower,
    /// Fail-low: the true value is at most the score.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<M> {
    pub key: u64,
    pub depth: u8,
    pub bound: Bound,
    pub score: Score,
    pub best_move: Option<M>,
}

/// What happens when a store lands on an occupied slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Replacement {
    /// The new entry always wins.
    Always,
    /// The deeper entry wins; entries left over from an earlier search are
    /// always replaced.
    #[default]
    DepthPreferred,
}

#[derive(Clone, Copy, Debug)]
struct Slot<M> {
    entry: Entry<M>,
    generation: u16,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable<M> {
    slots: Vec<Option<Slot<M>>>,
    policy: Replacement,
    generation: u16,
    used: usize,
}

impl<M: Copy> TranspositionTable<M> {
    /// Creates a table with `capacity` slots (at least one).
    pub fn new(capacity: usize, policy: Replacement) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            policy,
            generation: 0,
            used: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    pub fn probe(&self, key: u64) -> Option<Entry<M>> {
        self.slots[self.index(key)]
            .filter(|slot| slot.entry.key == key)
            .map(|slot| slot.entry)
    }

    pub fn store(&mut self, entry: Entry<M>) {
        let idx = self.index(entry.key);
        let generation = self.generation;
        let policy = self.policy;
        let slot = &mut self.slots[idx];

        let replace = match slot {
            None => {
                self.used += 1;
                true
            }
            Some(existing) => match policy {
                Replacement::Always => true,
                Replacement::DepthPreferred => {
                    existing.generation != generation || entry.depth >= existing.entry.depth
                }
            },
        };

        if replace {
            *slot = Some(Slot { entry, generation });
        }
    }

    /// Marks the start of a new top-level search. Entries survive, but under
    /// [`Replacement::DepthPreferred`] they no longer block shallower stores.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.used = 0;
        self.generation = 0;
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> Replacement {
        self.policy
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
