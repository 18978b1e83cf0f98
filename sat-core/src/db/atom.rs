//! The atom database: current valuation and the level each atom was fixed at.

use crate::structures::atom::Atom;

#[derive(Default)]
pub struct AtomDb {
    /// `value[atom]`: this atom's current value, or `None` if unassigned.
    /// Index `0` is unused (atoms are 1-indexed).
    value: Vec<Option<bool>>,

    /// `level[atom]`: the decision level at which `atom` was assigned.
    /// Meaningless while `value[atom]` is `None`.
    level: Vec<usize>,

    /// The last polarity `atom` held, for phase saving. `None` until first assigned.
    saved_polarity: Vec<Option<bool>>,

    max_atom: u32,
}

impl AtomDb {
    pub fn new(max_atom: u32) -> Self {
        let slots = max_atom as usize + 1;
        AtomDb {
            value: vec![None; slots],
            level: vec![0; slots],
            saved_polarity: vec![None; slots],
            max_atom,
        }
    }

    pub fn grow_to(&mut self, max_atom: u32) {
        if max_atom > self.max_atom {
            let slots = max_atom as usize + 1;
            self.value.resize(slots, None);
            self.level.resize(slots, 0);
            self.saved_polarity.resize(slots, None);
            self.max_atom = max_atom;
        }
    }

    pub fn max_atom(&self) -> u32 {
        self.max_atom
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.value[atom as usize]
    }

    pub fn level_of(&self, atom: Atom) -> usize {
        self.level[atom as usize]
    }

    pub fn saved_polarity(&self, atom: Atom) -> Option<bool> {
        self.saved_polarity[atom as usize]
    }

    pub fn set(&mut self, atom: Atom, polarity: bool, level: usize) {
        self.value[atom as usize] = Some(polarity);
        self.level[atom as usize] = level;
        self.saved_polarity[atom as usize] = Some(polarity);
    }

    pub fn unset(&mut self, atom: Atom) {
        self.value[atom as usize] = None;
    }

    pub fn is_assigned(&self, atom: Atom) -> bool {
        self.value[atom as usize].is_some()
    }
}
