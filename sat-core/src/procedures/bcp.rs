//! Boolean constraint propagation over the two-watched-literal scheme.

use log::trace;

use crate::context::Context;
use crate::db::clause::ClauseKey;
use crate::db::trail::Reason;

/// Drains the trail's propagation queue, returning the first conflicting
/// clause found, if any. Leaves every watch list in a consistent state
/// whether or not a conflict is found (spec §4.1: BCP never corrupts the
/// adapter, even on failure).
pub fn propagate(context: &mut Context) -> Option<ClauseKey> {
    let mut conflict: Option<ClauseKey> = None;

    while context.trail.propagate_head < context.trail.len() {
        let literal = context.trail.assignments[context.trail.propagate_head];
        context.trail.propagate_head += 1;
        let falsified = literal.negate();

        let watches = context.clause_db.take_watches_on(falsified);
        let mut kept = Vec::with_capacity(watches.len());

        for key in watches {
            if conflict.is_some() {
                kept.push(key);
                continue;
            }

            let clause = context.clause_db.get(key);
            let falsified_slot = if clause.literals[0] == falsified { 0 } else { 1 };
            let other_slot = 1 - falsified_slot;
            let other_literal = clause.literals[other_slot];

            if context.atom_db.value_of(other_literal.atom()) == Some(other_literal.polarity()) {
                kept.push(key);
                continue;
            }

            let replacement = (2..clause.literals.len()).find(|&pos| {
                let candidate = clause.literals[pos];
                context.atom_db.value_of(candidate.atom()) != Some(!candidate.polarity())
            });

            match replacement {
                Some(pos) => {
                    let clause = context.clause_db.get_mut(key);
                    clause.move_to_watch(pos, other_slot);
                    let new_watch = clause.literals[falsified_slot];
                    context.clause_db.add_watch(new_watch, key);
                }
                None => {
                    if context.atom_db.value_of(other_literal.atom()).is_none() {
                        let level = context.trail.current_level();
                        context
                            .atom_db
                            .set(other_literal.atom(), other_literal.polarity(), level);
                        context.activity.deactivate(other_literal.atom() as usize);
                        context.trail.assign(other_literal, Reason::Propagated(key));
                        trace!(target: "propagation", "forced {other_literal} by clause {key:?}");
                        kept.push(key);
                    } else {
                        trace!(target: "propagation", "conflict in clause {key:?}");
                        conflict = Some(key);
                        kept.push(key);
                    }
                }
            }
        }

        context.clause_db.replace_watches_on(falsified, kept);

        if conflict.is_some() {
            return conflict;
        }
    }

    None
}
