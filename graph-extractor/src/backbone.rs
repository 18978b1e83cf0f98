/*!
The Backbone Engine of spec §4.2: given a solver holding `F` and an
assumption set `A`, returns `Backbone(F, A)`.

Both algorithms of §4.2 share [compute]; the only difference is whether
surviving candidates get an activity bump after each SAT witness (§4.2.a
step 3e), which `sat_core`'s own correctness invariant (config.rs doc
comment: bumping never changes *what* is found, only call count) guarantees
is safe to toggle.
*/

use std::collections::VecDeque;

use log::trace;
use sat_core::context::SolveResult;
use sat_core::structures::literal::CLiteral;
use sat_core::{Atom, Context, ErrorKind};

use crate::config::Algorithm;
use crate::model::Backbone;

/// Runs the backbone engine of spec §4.2 against `context`, which must
/// already hold the formula `F`. `assumptions` is `A`; an empty slice
/// computes the global backbone `B*`.
pub fn compute(
    context: &mut Context,
    assumptions: &[CLiteral],
    algorithm: Algorithm,
) -> Result<Backbone, ErrorKind> {
    match context.solve(assumptions)? {
        SolveResult::Unsatisfiable => return Ok(Backbone::Refuted),
        SolveResult::Satisfiable => {}
    }

    let max_atom = context.max_atom();
    let mut candidates: VecDeque<CLiteral> = (1..=max_atom)
        .map(|atom| CLiteral::new(atom, context.value(atom).expect("every atom is assigned after SAT")))
        .collect();

    let mut result = vec![0i64; max_atom as usize + 1];
    let mut call_assumptions: Vec<CLiteral> = assumptions.to_vec();
    let base_len = call_assumptions.len();

    while let Some(literal) = candidates.pop_front() {
        call_assumptions.truncate(base_len);
        call_assumptions.push(literal.negate());

        match context.solve(&call_assumptions)? {
            SolveResult::Unsatisfiable => {
                result[literal.atom() as usize] = signed(literal);
                trace!(target: "backbone", "atom {} fixed {}", literal.atom(), literal.polarity());
            }
            SolveResult::Satisfiable => {
                candidates.retain(|candidate| context.value(candidate.atom()) == Some(candidate.polarity()));
                if algorithm == Algorithm::Attention {
                    for candidate in &candidates {
                        context.bump_activity(candidate.atom());
                    }
                }
            }
        }
    }

    Ok(Backbone::Fixed(result))
}

fn signed(literal: CLiteral) -> i64 {
    let magnitude = literal.atom() as i64;
    if literal.polarity() {
        magnitude
    } else {
        -magnitude
    }
}

/// Builds the single-literal assumption list for "F ∧ {v}" (spec §4.3 step 1).
pub fn assume_true(atom: Atom) -> [CLiteral; 1] {
    [CLiteral::new(atom, true)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sat_core::Config;

    fn context_from_clauses(max_atom: Atom, clauses: &[&[i64]]) -> Context {
        let mut context = Context::from_config(Config::default());
        context.ensure_atom(max_atom);
        for clause in clauses {
            let literals: Vec<CLiteral> = clause.iter().map(|&v| CLiteral::from_dimacs(v as isize)).collect();
            context.add_clause(literals).unwrap();
        }
        context
    }

    #[test]
    fn global_backbone_of_mandatory_dependency() {
        // b -> a, i.e. (a v -b)
        let mut context = context_from_clauses(2, &[&[1, -2]]);
        let backbone = compute(&mut context, &[], Algorithm::Attention).unwrap();
        assert_eq!(backbone.signed(1), 0);
        assert_eq!(backbone.signed(2), 0);
    }

    #[test]
    fn backbone_under_assumption_forces_dependency() {
        let mut context = context_from_clauses(2, &[&[1, -2]]);
        let backbone = compute(&mut context, &assume_true(2), Algorithm::Attention).unwrap();
        assert_eq!(backbone.signed(1), 1);
    }

    #[test]
    fn refuted_when_assumption_contradicts_formula() {
        let mut context = context_from_clauses(1, &[&[1]]);
        let backbone = compute(&mut context, &[CLiteral::new(1, false)], Algorithm::Attention).unwrap();
        assert!(backbone.is_refuted());
    }

    #[test]
    fn core_feature_is_in_global_backbone() {
        let mut context = context_from_clauses(1, &[&[1]]);
        let backbone = compute(&mut context, &[], Algorithm::Attention).unwrap();
        assert_eq!(backbone.signed(1), 1);
    }

    #[test]
    fn attention_and_plain_agree() {
        let mut ctx_a = context_from_clauses(3, &[&[1, -2], &[2, -3]]);
        let mut ctx_b = context_from_clauses(3, &[&[1, -2], &[2, -3]]);
        let a = compute(&mut ctx_a, &assume_true(3), Algorithm::Attention).unwrap();
        let b = compute(&mut ctx_b, &assume_true(3), Algorithm::Plain).unwrap();
        for atom in 1..=3 {
            assert_eq!(a.signed(atom), b.signed(atom));
        }
    }
}
