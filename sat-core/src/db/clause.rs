//! The clause database: dense storage of clauses plus their watch lists.

use crate::structures::clause::{ClauseSource, StoredClause};
use crate::structures::literal::{CClause, CLiteral};

/// An opaque handle to a stored clause.
///
/// Indexes directly into [ClauseDb]'s backing vector - a single dense arena,
/// unlike upstream's unit/binary/long tiering (see `DESIGN.md`), which this
/// core does not need at the scale it targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ClauseKey(u32);

pub struct ClauseDb {
    clauses: Vec<StoredClause>,
    /// `watch_lists[literal.index()]` holds the clauses currently watching
    /// `literal`: clauses that must be revisited when `literal` is falsified.
    watch_lists: Vec<Vec<ClauseKey>>,
    max_atom: u32,
}

impl ClauseDb {
    pub fn new(max_atom: u32) -> Self {
        ClauseDb {
            clauses: Vec::new(),
            watch_lists: vec![Vec::new(); (max_atom as usize) * 2],
            max_atom,
        }
    }

    pub fn grow_to(&mut self, max_atom: u32) {
        if max_atom > self.max_atom {
            self.watch_lists.resize((max_atom as usize) * 2, Vec::new());
            self.max_atom = max_atom;
        }
    }

    /// Stores `literals` (already deduplicated, length >= 2) as a watched
    /// clause, watching its first two literals.
    pub fn insert_watched(&mut self, literals: CClause, source: ClauseSource) -> ClauseKey {
        let key = ClauseKey(self.clauses.len() as u32);
        let watch_a = literals[0];
        let watch_b = literals[1];
        self.clauses.push(StoredClause::new(literals, source));
        self.watch_lists[watch_a.index()].push(key);
        self.watch_lists[watch_b.index()].push(key);
        key
    }

    pub fn get(&self, key: ClauseKey) -> &StoredClause {
        &self.clauses[key.0 as usize]
    }

    pub fn get_mut(&mut self, key: ClauseKey) -> &mut StoredClause {
        &mut self.clauses[key.0 as usize]
    }

    pub fn watches_on(&self, literal: CLiteral) -> &[ClauseKey] {
        &self.watch_lists[literal.index()]
    }

    pub fn take_watches_on(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.watch_lists[literal.index()])
    }

    pub fn replace_watches_on(&mut self, literal: CLiteral, watches: Vec<ClauseKey>) {
        self.watch_lists[literal.index()] = watches;
    }

    pub fn add_watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.watch_lists[literal.index()].push(key);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(i, c)| (ClauseKey(i as u32), c))
    }
}
