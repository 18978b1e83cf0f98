//! Counters kept across a solve, used to drive the restart schedule and
//! available to callers interested in solver statistics.

use crate::generic::luby::Luby;

#[derive(Default)]
pub struct Counters {
    /// Conflicts seen since the last restart.
    pub fresh_conflicts: u32,

    /// Conflicts seen across the whole solve.
    pub total_conflicts: usize,

    /// Restarts performed across the whole solve.
    pub restarts: usize,

    /// The current element of the Luby sequence, advanced once per restart.
    pub luby: Luby,
}
