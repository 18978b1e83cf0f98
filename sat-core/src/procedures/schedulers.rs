//! Interrupt conditions checked after each conflict, to decide whether a
//! restart is due.

use crate::context::Context;

/// Whether fresh conflicts since the last restart are a multiple of the
/// current Luby element, scaled by [Config::luby_unit](crate::config::Config::luby_unit).
pub fn luby_fresh_conflict_interrupt(context: &Context) -> bool {
    let luby = context.config.luby_unit * context.counters.luby.current();
    context.counters.fresh_conflicts % luby == 0
}
