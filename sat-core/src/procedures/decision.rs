//! Choosing the next atom to branch on, and maintaining its activity.

use crate::context::Context;
use crate::structures::atom::Atom;
use crate::structures::literal::CLiteral;

/// Picks the next literal to decide, or `None` if every atom already has a
/// value (the formula is satisfied under the current trail).
///
/// Atoms are chosen in descending activity order (the heap in
/// [Context::activity](crate::context::Context) holds exactly the
/// unassigned atoms); polarity follows phase saving, falling back to
/// [Config::polarity_lean](crate::config::Config::polarity_lean).
pub fn choose(context: &mut Context) -> Option<CLiteral> {
    let atom = context.activity.pop_max()? as Atom;

    let polarity = match context.atom_db.saved_polarity(atom) {
        Some(p) if context.config.phase_saving => p,
        _ => {
            use rand::Rng;
            context.rng.gen_bool(context.config.polarity_lean.clamp(0.0, 1.0))
        }
    };

    Some(CLiteral::new(atom, polarity))
}

/// Bumps `atom`'s activity by the current bump amount, rescaling every
/// atom's activity if the bump would overflow [Config::activity_max](crate::config::Config::activity_max).
pub fn bump(context: &mut Context, atom: Atom) {
    if *context.activity.value_at(atom as usize) + context.activity_bump > context.config.activity_max {
        rescale(context);
    }
    let updated = *context.activity.value_at(atom as usize) + context.activity_bump;
    context.activity.revalue(atom as usize, updated);
}

/// Grows the bump amount applied on the *next* call to [bump], implementing
/// exponential VSIDS-style decay without having to touch every atom's
/// stored activity each conflict.
pub fn decay_bump(context: &mut Context) {
    context.activity_bump *= 1.0 / context.config.activity_decay;
}

fn rescale(context: &mut Context) {
    let factor = 1.0 / context.config.activity_max;
    context.activity.apply_to_all(|v| v * factor);
    context.activity_bump *= factor;
}
