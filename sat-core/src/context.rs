/*!
The context: to which clauses are added and within which solves take place.

Mirrors `otter_sat::context::Context` in shape - a single struct owning the
clause database, the atom database, the trail, and the activity heap - but
without the generic-over-rng parameter, since one fixed PRNG is enough here.
*/

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::counters::Counters;
use crate::db::atom::AtomDb;
use crate::db::clause::ClauseDb;
use crate::db::trail::{Reason, Trail};
use crate::generic::index_heap::IndexHeap;
use crate::procedures;
use crate::structures::atom::Atom;
use crate::structures::clause::{ClauseBuilder, ClauseSource};
use crate::structures::literal::{CClause, CLiteral};
use crate::types::err::{BuildError, ErrorKind, SolveError};

/// The outcome of a [Context::solve] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveResult {
    /// The formula, conjoined with any assumptions passed to this call, has
    /// a model - readable via [Context::value].
    Satisfiable,

    /// The formula, conjoined with any assumptions passed to this call, has
    /// no model. This does *not* imply the base formula (with no
    /// assumptions) is unsatisfiable.
    Unsatisfiable,
}

/// The SAT Core Adapter: a minimal `add_clause` / `solve` / `value` /
/// `bump_activity` interface in front of a two-watched-literal CDCL solver.
pub struct Context {
    pub(crate) config: Config,
    pub(crate) clause_db: ClauseDb,
    pub(crate) atom_db: AtomDb,
    pub(crate) trail: Trail,
    pub(crate) activity: IndexHeap<f64>,
    pub(crate) activity_bump: f64,
    pub(crate) rng: StdRng,
    pub(crate) counters: Counters,
    sealed: bool,
}

impl Context {
    /// Builds an empty context. Atoms are allocated as they are first seen
    /// by [add_clause](Context::add_clause), up to `max_atom`.
    pub fn new(max_atom: u32, config: Config) -> Self {
        let mut activity = IndexHeap::default();
        for atom in 1..=max_atom {
            activity.revalue(atom as usize, 0.0);
            activity.activate(atom as usize);
        }
        let rng = StdRng::seed_from_u64(config.rng_seed);
        let activity_bump = config.activity_bump;
        Context {
            clause_db: ClauseDb::new(max_atom),
            atom_db: AtomDb::new(max_atom),
            trail: Trail::default(),
            activity,
            activity_bump,
            rng,
            counters: Counters::default(),
            sealed: false,
            config,
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(0, config)
    }

    pub fn max_atom(&self) -> u32 {
        self.atom_db.max_atom()
    }

    /// Grows the context to cover atoms up to and including `atom`, if it
    /// does not already. Expected to be called only before the first
    /// [solve](Context::solve) (typically once, from the number of
    /// variables declared in a DIMACS header).
    pub fn ensure_atom(&mut self, atom: Atom) {
        if atom > self.max_atom() {
            let previous_max = self.max_atom();
            self.clause_db.grow_to(atom);
            self.atom_db.grow_to(atom);
            for a in (previous_max + 1)..=atom {
                self.activity.revalue(a as usize, 0.0);
                self.activity.activate(a as usize);
            }
        }
    }

    /// Adds a clause to the formula. Valid only before the first [solve](Context::solve) call.
    ///
    /// Every literal's atom must already be covered by [ensure_atom](Context::ensure_atom).
    /// Deduplicates literals and drops tautological clauses (spec §3).
    /// A unit clause that contradicts an existing level-zero fact is a hard
    /// [BuildError::Unsatisfiable].
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = CLiteral>) -> Result<(), ErrorKind> {
        if self.sealed {
            return Err(BuildError::ClauseAfterSolve.into());
        }

        let mut builder = ClauseBuilder::default();
        for literal in literals {
            debug_assert!(literal.atom() <= self.max_atom(), "atom not covered by ensure_atom");
            builder.push(literal);
        }
        if builder.is_tautology() {
            return Ok(());
        }
        let clause: CClause = builder.finish();

        match clause.len() {
            0 => Err(BuildError::Unsatisfiable.into()),
            1 => {
                let literal = clause[0];
                match self.atom_db.value_of(literal.atom()) {
                    Some(v) if v != literal.polarity() => Err(BuildError::Unsatisfiable.into()),
                    Some(_) => Ok(()),
                    None => {
                        self.atom_db.set(literal.atom(), literal.polarity(), 0);
                        self.activity.deactivate(literal.atom() as usize);
                        self.trail.assign(literal, Reason::Unit);
                        if procedures::bcp::propagate(self).is_some() {
                            Err(BuildError::Unsatisfiable.into())
                        } else {
                            Ok(())
                        }
                    }
                }
            }
            _ => self.insert_clause_respecting_level_zero(clause, ClauseSource::Original),
        }
    }

    fn literal_is_false(&self, literal: CLiteral) -> bool {
        self.atom_db.value_of(literal.atom()) == Some(!literal.polarity())
    }

    /// Inserts a clause of length >= 2, choosing its two watched literals so
    /// neither is already falsified by level-zero facts where possible.
    ///
    /// If the clause has already been reduced to a single live literal by
    /// prior level-zero facts, that literal is forced immediately (and, if
    /// it is already falsified too, the clause is contradictory).
    fn insert_clause_respecting_level_zero(
        &mut self,
        mut clause: CClause,
        source: ClauseSource,
    ) -> Result<(), ErrorKind> {
        let live: Vec<usize> = (0..clause.len())
            .filter(|&i| !self.literal_is_false(clause[i]))
            .collect();

        if live.is_empty() {
            return Err(BuildError::Unsatisfiable.into());
        }

        let watch_a = live[0];
        let watch_b = live
            .get(1)
            .copied()
            .unwrap_or_else(|| (0..clause.len()).find(|&i| i != watch_a).unwrap());

        clause.swap(0, watch_a);
        let watch_b = if watch_b == 0 { watch_a } else { watch_b };
        clause.swap(1, watch_b);

        let forced_literal = clause[0];
        let already_satisfied =
            self.atom_db.value_of(forced_literal.atom()) == Some(forced_literal.polarity());

        self.clause_db.insert_watched(clause, source);

        if live.len() == 1 && !already_satisfied {
            self.atom_db.set(forced_literal.atom(), forced_literal.polarity(), 0);
            self.activity.deactivate(forced_literal.atom() as usize);
            self.trail.assign(forced_literal, Reason::Unit);
            if procedures::bcp::propagate(self).is_some() {
                return Err(BuildError::Unsatisfiable.into());
            }
        }

        Ok(())
    }

    /// Solves the formula conjoined with `assumptions`.
    ///
    /// Assumptions are retracted automatically at the start of the call (the
    /// context always begins from the level-zero state), so they are valid
    /// only for this call, per spec §4.1.
    pub fn solve(&mut self, assumptions: &[CLiteral]) -> Result<SolveResult, ErrorKind> {
        self.sealed = true;

        // Retract any assignments left from a previous solve.
        self.backtrack_to(0);
        self.counters.fresh_conflicts = 0;

        for literal in assumptions {
            if literal.atom() == 0 || literal.atom() > self.max_atom() {
                return Err(SolveError::UnknownAtom.into());
            }
        }

        for &literal in assumptions {
            match self.atom_db.value_of(literal.atom()) {
                Some(v) if v == literal.polarity() => continue,
                Some(_) => {
                    // Contradicts a level-zero fact: refuted immediately.
                    return Ok(SolveResult::Unsatisfiable);
                }
                None => {}
            }
            self.trail.push_level();
            self.atom_db.set(literal.atom(), literal.polarity(), self.trail.current_level());
            self.activity.deactivate(literal.atom() as usize);
            self.trail.assign(literal, Reason::Assumption);
            if let Some(conflict) = procedures::bcp::propagate(self) {
                let assumption_level = self.trail.current_level();
                return self.resolve_conflict_or_refute(conflict, assumption_level);
            }
        }
        self.trail.assumption_levels = self.trail.current_level();

        loop {
            if let Some(conflict) = procedures::bcp::propagate(self) {
                let assumption_level = self.trail.assumption_levels;
                match self.resolve_conflict_or_refute(conflict, assumption_level)? {
                    SolveResult::Unsatisfiable => return Ok(SolveResult::Unsatisfiable),
                    SolveResult::Satisfiable => continue,
                }
            }

            match procedures::decision::choose(self) {
                None => return Ok(SolveResult::Satisfiable),
                Some(literal) => {
                    self.trail.push_level();
                    let level = self.trail.current_level();
                    self.atom_db.set(literal.atom(), literal.polarity(), level);
                    self.trail.assign(literal, Reason::Decision);
                }
            }
        }
    }

    /// Handles a conflict found during `propagate`: learns a clause and
    /// backjumps, unless the conflict cannot be resolved without undoing an
    /// assumption, in which case the call reports `Unsatisfiable` (the
    /// assumption set is refuted, not the base formula).
    fn resolve_conflict_or_refute(
        &mut self,
        conflict: crate::db::clause::ClauseKey,
        assumption_level: usize,
    ) -> Result<SolveResult, ErrorKind> {
        if self.trail.current_level() <= assumption_level {
            return Ok(SolveResult::Unsatisfiable);
        }
        let (learnt, backtrack_level) = procedures::analysis::analyze(self, conflict);
        if backtrack_level < assumption_level {
            return Ok(SolveResult::Unsatisfiable);
        }
        procedures::backjump::backjump_to(self, backtrack_level);
        procedures::analysis::assert_learnt(self, learnt);

        self.counters.total_conflicts += 1;
        self.counters.fresh_conflicts += 1;
        if self.config.restarts_enabled && procedures::schedulers::luby_fresh_conflict_interrupt(self) {
            self.counters.luby.next();
            procedures::backjump::backjump_to(self, assumption_level);
            self.counters.fresh_conflicts = 0;
            self.counters.restarts += 1;
        }

        Ok(SolveResult::Satisfiable)
    }

    /// Undoes trail entries down to (and including) `level + 1`, leaving the
    /// context as if only `level` decisions/assumptions had ever been made.
    pub(crate) fn backtrack_to(&mut self, level: usize) {
        if self.trail.current_level() <= level {
            return;
        }
        let undone = self.trail.undo_to_level(level);
        for literal in undone {
            self.atom_db.unset(literal.atom());
            self.activity.activate(literal.atom() as usize);
        }
        self.trail.assumption_levels = self.trail.assumption_levels.min(level);
    }

    /// The value of `atom` in the current model, if solved and satisfiable.
    pub fn value(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// Raises `atom`'s branching priority, per spec §4.1/§4.2.a. Purely a
    /// heuristic hint: it only ever changes which SAT calls are made, never
    /// their answers.
    pub fn bump_activity(&mut self, atom: Atom) {
        procedures::decision::bump(self, atom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_from_clauses(max_atom: u32, clauses: &[&[i64]]) -> Context {
        let mut context = Context::from_config(Config::default());
        context.ensure_atom(max_atom);
        for clause in clauses {
            let literals: Vec<CLiteral> = clause.iter().map(|&v| CLiteral::from_dimacs(v as isize)).collect();
            context.add_clause(literals).unwrap();
        }
        context
    }

    fn assert_satisfies(context: &Context, clauses: &[&[i64]]) {
        for clause in clauses {
            let satisfied = clause.iter().any(|&v| {
                let literal = CLiteral::from_dimacs(v as isize);
                context.value(literal.atom()) == Some(literal.polarity())
            });
            assert!(satisfied, "clause {clause:?} not satisfied by current valuation");
        }
    }

    /// A unit-clause fact at level zero must survive a `solve` call that
    /// makes free decisions above it, across repeated calls - `backtrack_to`
    /// must retract only the decisions/assumptions above level zero, never
    /// the level-zero facts themselves.
    #[test]
    fn unit_fact_survives_decisions_across_solve_calls() {
        let clauses: &[&[i64]] = &[&[1], &[2, 3]];
        let mut context = context_from_clauses(3, clauses);

        let result = context.solve(&[]).unwrap();
        assert_eq!(result, SolveResult::Satisfiable);
        assert_eq!(context.value(1), Some(true));

        // A second call with a fresh assumption forces `backtrack_to(0)` to
        // run again after at least one decision was made above level zero.
        let result = context.solve(&[CLiteral::new(3, true)]).unwrap();
        assert_eq!(result, SolveResult::Satisfiable);
        assert_eq!(context.value(1), Some(true));

        let result = context.solve(&[CLiteral::new(3, false)]).unwrap();
        assert_eq!(result, SolveResult::Satisfiable);
        assert_eq!(context.value(1), Some(true));
    }

    /// A satisfiable formula that forces at least one conflict (an
    /// at-least-one / at-most-one encoding over three atoms) must still
    /// produce a model that actually satisfies every clause - this would
    /// fail if `backjump_to` dropped the decision level it is supposed to
    /// retain, leaving the asserting literal's partner unassigned.
    #[test]
    fn satisfiable_formula_requiring_backjump_yields_a_real_model() {
        let clauses: &[&[i64]] = &[&[1, 2, 3], &[-1, -2], &[-1, -3], &[-2, -3]];
        let mut context = context_from_clauses(3, clauses);

        let result = context.solve(&[]).unwrap();
        assert_eq!(result, SolveResult::Satisfiable);
        assert_satisfies(&context, clauses);
    }

    /// Every assignment to three atoms is forbidden by one of eight
    /// width-3 clauses (the full blocking truth table), so the formula is
    /// unsatisfiable regardless of decision order - deciding it correctly
    /// requires multiple rounds of conflict analysis and non-chronological
    /// backjumping across more than one decision level.
    #[test]
    fn unsatisfiable_formula_requires_multi_level_backjumping() {
        let mut clauses: Vec<Vec<i64>> = Vec::new();
        for mask in 0..8i64 {
            let clause: Vec<i64> = (0..3)
                .map(|bit| {
                    let atom = bit + 1;
                    let assignment_is_true = (mask >> bit) & 1 == 1;
                    if assignment_is_true {
                        -atom
                    } else {
                        atom
                    }
                })
                .collect();
            clauses.push(clause);
        }
        let refs: Vec<&[i64]> = clauses.iter().map(|c| c.as_slice()).collect();
        let mut context = context_from_clauses(3, &refs);

        let result = context.solve(&[]).unwrap();
        assert_eq!(result, SolveResult::Unsatisfiable);
    }
}
