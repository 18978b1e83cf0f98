//! The data model of spec §3: the clause database, the name/auxiliary
//! tables, and the backbone representation shared by every component.

use sat_core::structures::literal::{CClause, CLiteral};
use sat_core::Atom;

/// The clause database, built once by the [reader](crate::reader) and never
/// mutated again (spec §3's Formula invariant).
#[derive(Clone, Debug)]
pub struct CnfFormula {
    pub max_atom: Atom,
    pub clauses: Vec<CClause>,
}

impl CnfFormula {
    /// Loads `self` into a fresh solver context, in clause order.
    ///
    /// Called once per worker, sequentially on the driver strand - see the
    /// "Critical initialization contract" of spec §5.
    pub fn load_into(&self, context: &mut sat_core::Context) -> Result<(), sat_core::ErrorKind> {
        context.ensure_atom(self.max_atom);
        for clause in &self.clauses {
            context.add_clause(clause.iter().copied())?;
        }
        Ok(())
    }
}

/// The human-readable name and auxiliary-ness of every variable, parsed from
/// `c <var> <name>` DIMACS comments (spec §6).
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    /// `names[atom]`: joined comment tail for `atom`, first-seen order
    /// (spec §9's duplicate-name resolution), or `None` if never named.
    names: Vec<Option<String>>,
    /// `auxiliary[atom]`: true iff the variable's name starts with `aux_`.
    auxiliary: Vec<bool>,
}

impl VariableTable {
    pub fn new(max_atom: Atom) -> Self {
        let slots = max_atom as usize + 1;
        VariableTable {
            names: vec![None; slots],
            auxiliary: vec![false; slots],
        }
    }

    pub fn grow_to(&mut self, max_atom: Atom) {
        let slots = max_atom as usize + 1;
        if self.names.len() < slots {
            self.names.resize(slots, None);
            self.auxiliary.resize(slots, false);
        }
    }

    /// Records (or extends) the name of `atom`. A second comment for the
    /// same atom has its tail appended with a space, per spec §9.
    pub fn name(&mut self, atom: Atom, tail: &str) {
        self.grow_to(atom);
        let slot = &mut self.names[atom as usize];
        match slot {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(tail);
            }
            None => *slot = Some(tail.to_string()),
        }
        self.auxiliary[atom as usize] = self
            .names[atom as usize]
            .as_deref()
            .map(|n| n.starts_with("aux_"))
            .unwrap_or(false);
    }

    /// The display name for `atom`, defaulting to its DIMACS index if it was
    /// never named.
    pub fn display_name(&self, atom: Atom) -> String {
        self.names
            .get(atom as usize)
            .and_then(|n| n.clone())
            .unwrap_or_else(|| atom.to_string())
    }

    pub fn is_auxiliary(&self, atom: Atom) -> bool {
        self.auxiliary.get(atom as usize).copied().unwrap_or(false)
    }

    pub fn max_atom(&self) -> Atom {
        self.names.len().saturating_sub(1) as Atom
    }
}

/// `Backbone(F, A)` of spec §3: the set of literals fixed in every model of
/// `F ∧ A`, or the special `Refuted` value when `F ∧ A` is unsatisfiable.
#[derive(Clone, Debug)]
pub enum Backbone {
    Refuted,
    /// `fixed[atom]`: `atom` as a positive value if forced true, negated if
    /// forced false, `0` if not fixed. Index `0` is unused.
    Fixed(Vec<i64>),
}

impl Backbone {
    pub fn unconstrained(max_atom: Atom) -> Self {
        Backbone::Fixed(vec![0; max_atom as usize + 1])
    }

    /// The signed value recorded for `atom`: `+atom`, `-atom`, or `0`.
    ///
    /// Refuted backbones report every atom as unfixed - there is no model at
    /// all to read a polarity from, so callers must check
    /// [is_refuted](Backbone::is_refuted) separately where that distinction
    /// matters.
    pub fn signed(&self, atom: Atom) -> i64 {
        match self {
            Backbone::Refuted => 0,
            Backbone::Fixed(v) => v.get(atom as usize).copied().unwrap_or(0),
        }
    }

    pub fn is_refuted(&self) -> bool {
        matches!(self, Backbone::Refuted)
    }

    /// `true`/`false`/`None` (not fixed), as in spec §3's `Backbone` entry.
    pub fn value(&self, atom: Atom) -> Option<bool> {
        match self.signed(atom) {
            0 => None,
            n if n > 0 => Some(true),
            _ => Some(false),
        }
    }

    pub fn literal(&self, literal: CLiteral) -> bool {
        self.value(literal.atom()) == Some(literal.polarity())
    }
}

/// Requires edge `(v, w)` of spec §3.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequiresEdge {
    pub from: Atom,
    pub to: Atom,
}

/// Excludes edge `{v, w}` of spec §3, stored with `v <= w`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct ExcludesEdge {
    pub lo: Atom,
    pub hi: Atom,
}

impl ExcludesEdge {
    pub fn new(a: Atom, b: Atom) -> Self {
        if a <= b {
            ExcludesEdge { lo: a, hi: b }
        } else {
            ExcludesEdge { lo: b, hi: a }
        }
    }
}

/// The candidate set `C` of spec §3: non-auxiliary variables not already
/// fixed by the global backbone.
pub fn candidate_set(max_atom: Atom, names: &VariableTable, global: &Backbone) -> Vec<Atom> {
    (1..=max_atom)
        .filter(|&v| !names.is_auxiliary(v) && global.signed(v) == 0)
        .collect()
}
