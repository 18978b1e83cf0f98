/*!
Configuration of a [Context](crate::context::Context).

All tuning knobs that affect a solve's *performance* (but never its
reported satisfiability or backbone membership, see §4.2's activity-bump
invariant) live here, following the shape of `otter_sat::config::Config`.
*/

pub mod defaults;

/// The primary configuration structure.
///
/// `Config::default()` is deterministic across runs: same seed, same
/// schedule, same branching tie-breaks, which is relied on by the
/// determinism property of spec §8.
#[derive(Clone, Debug)]
pub struct Config {
    /// Per-bump activity increase for a freshly conflicting atom.
    pub activity_bump: f64,

    /// Growth factor applied to the bump after each conflict (> 1.0).
    pub activity_decay: f64,

    /// Rescale threshold for activities.
    pub activity_max: f64,

    /// Default to an atom's last assigned polarity when deciding, rather
    /// than always leaning toward [polarity_lean](Config::polarity_lean).
    pub phase_saving: bool,

    /// Probability (ignored while `phase_saving` has a prior value) of
    /// deciding a fresh atom positive.
    pub polarity_lean: f64,

    /// The `u` value for the Luby restart schedule.
    pub luby_unit: u32,

    /// Whether restarts are permitted.
    pub restarts_enabled: bool,

    /// Fixed RNG seed, so two runs of the same input produce the same
    /// sequence of tie-break / restart decisions.
    pub rng_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activity_bump: defaults::ACTIVITY_BUMP,
            activity_decay: defaults::ACTIVITY_DECAY,
            activity_max: defaults::ACTIVITY_MAX,
            phase_saving: defaults::PHASE_SAVING,
            polarity_lean: defaults::POLARITY_LEAN,
            luby_unit: defaults::LUBY_UNIT,
            restarts_enabled: defaults::RESTARTS_ENABLED,
            rng_seed: 0,
        }
    }
}
