//! The trail of assignments.
//!
//! Level zero holds literals forced by unit clauses alone. Each level above
//! zero begins with either an assumption (levels `1..=assumption_count`) or
//! a free decision, followed by whatever BCP derives from it.

use crate::structures::literal::CLiteral;

/// The reason an atom holds its current value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reason {
    /// Forced by a unit clause in the input, at level zero.
    Unit,

    /// An assumption literal, pushed for the current solve call only.
    Assumption,

    /// A free choice made by the decision procedure.
    Decision,

    /// Propagated by boolean constraint propagation from the given clause.
    Propagated(crate::db::clause::ClauseKey),
}

#[derive(Default)]
pub struct Trail {
    /// Every assignment made, in the order it was made.
    pub assignments: Vec<CLiteral>,

    /// For each assignment in `assignments`, why it was made.
    pub reasons: Vec<Reason>,

    /// Index into `assignments` where each decision level begins. `level_starts[0]` is
    /// always `0` (there is no separate marker for level zero itself).
    pub level_starts: Vec<usize>,

    /// The index of the first assignment whose consequences have not yet
    /// been propagated.
    pub propagate_head: usize,

    /// How many of the trail's decision levels are assumptions, set fresh at
    /// the start of each `solve` call.
    pub assumption_levels: usize,
}

impl Trail {
    /// The current decision level (`0` means nothing beyond unit facts has
    /// been assigned).
    pub fn current_level(&self) -> usize {
        self.level_starts.len()
    }

    pub fn push_level(&mut self) {
        self.level_starts.push(self.assignments.len());
    }

    pub fn assign(&mut self, literal: CLiteral, reason: Reason) {
        self.assignments.push(literal);
        self.reasons.push(reason);
    }

    /// Truncates the trail back to the end of `level`, returning the undone
    /// literals in the order they were undone (most recent first).
    ///
    /// `level_starts[i]` holds the start of level `i + 1`, so the cut point
    /// for keeping levels `0..=level` is `level_starts[level]` - the start of
    /// the first level being discarded, not `level_starts[level - 1]`.
    pub fn undo_to_level(&mut self, level: usize) -> Vec<CLiteral> {
        let cut = self.level_starts.get(level).copied().unwrap_or(self.assignments.len());
        self.level_starts.truncate(level);
        self.reasons.truncate(cut);
        let undone = self.assignments.split_off(cut);
        self.propagate_head = self.propagate_head.min(cut);
        undone.into_iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
