//! Conflict analysis: first-UIP resolution, following the scheme used
//! throughout the CDCL literature (and `otter_sat::procedures::analysis`).

use log::trace;

use crate::context::Context;
use crate::db::clause::ClauseKey;
use crate::db::trail::Reason;
use crate::structures::atom::Atom;
use crate::structures::clause::ClauseSource;
use crate::structures::literal::CClause;

use super::decision;

/// Resolves the conflicting clause back to a single literal asserted at the
/// current decision level (the first unique implication point), returning
/// the learnt clause (asserting literal last) and the level to backjump to.
pub fn analyze(context: &mut Context, conflict: ClauseKey) -> (CClause, usize) {
    let current_level = context.trail.current_level();
    let mut seen = vec![false; context.max_atom() as usize + 1];
    let mut learnt: CClause = Vec::new();
    let mut counter: usize = 0;
    let mut trail_index = context.trail.len();
    let mut resolving: CClause = context.clause_db.get(conflict).literals.clone();
    let mut skip_atom: Option<Atom> = None;

    let asserting_literal;

    loop {
        for &literal in &resolving {
            if Some(literal.atom()) == skip_atom {
                continue;
            }
            let atom = literal.atom();
            if seen[atom as usize] {
                continue;
            }
            let level = context.atom_db.level_of(atom);
            if level == 0 {
                // Level-zero facts are already implied by the formula alone.
                continue;
            }
            seen[atom as usize] = true;
            decision::bump(context, atom);
            if level == current_level {
                counter += 1;
            } else {
                learnt.push(literal);
            }
        }

        loop {
            trail_index -= 1;
            let candidate = context.trail.assignments[trail_index];
            if seen[candidate.atom() as usize] {
                break;
            }
        }
        let resolved = context.trail.assignments[trail_index];
        seen[resolved.atom() as usize] = false;
        counter -= 1;

        if counter == 0 {
            asserting_literal = resolved.negate();
            break;
        }

        skip_atom = Some(resolved.atom());
        resolving = match context.trail.reasons[trail_index] {
            Reason::Propagated(key) => context.clause_db.get(key).literals.clone(),
            other => unreachable!("literal contributing to the UIP count must be propagated, found {other:?}"),
        };
    }

    learnt.push(asserting_literal);
    decision::decay_bump(context);

    let backtrack_level = learnt[..learnt.len() - 1]
        .iter()
        .map(|literal| context.atom_db.level_of(literal.atom()))
        .max()
        .unwrap_or(0);

    trace!(target: "analysis", "learnt clause of size {} backtracking to level {backtrack_level}", learnt.len());

    (learnt, backtrack_level)
}

/// Inserts a learnt clause and asserts its implied literal, after the caller
/// has already backjumped to the clause's backtrack level.
pub fn assert_learnt(context: &mut Context, mut learnt: CClause) {
    if learnt.len() == 1 {
        let literal = learnt[0];
        context.atom_db.set(literal.atom(), literal.polarity(), 0);
        context.activity.deactivate(literal.atom() as usize);
        context.trail.assign(literal, Reason::Unit);
        return;
    }

    let asserting_index = learnt.len() - 1;
    let asserting = learnt[asserting_index];

    let second_index = (0..asserting_index)
        .max_by_key(|&i| context.atom_db.level_of(learnt[i].atom()))
        .expect("a learnt clause of length >= 2 has a second literal");

    learnt.swap(0, asserting_index);
    let second_index = if second_index == 0 { asserting_index } else { second_index };
    learnt.swap(1, second_index);

    let level = context.trail.current_level();
    let key = context.clause_db.insert_watched(learnt, ClauseSource::Learnt);

    context.atom_db.set(asserting.atom(), asserting.polarity(), level);
    context.activity.deactivate(asserting.atom() as usize);
    context.trail.assign(asserting, Reason::Propagated(key));
}
