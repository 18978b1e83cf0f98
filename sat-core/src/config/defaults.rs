//! Default values for [Config](super::Config), broken out so the CLI layer
//! (and its `--help` text) can reference the same constants the struct uses.

/// Initial per-bump increase applied to an atom's activity.
pub const ACTIVITY_BUMP: f64 = 1.0;

/// Growth factor applied to the activity bump after each conflict.
pub const ACTIVITY_DECAY: f64 = 0.95;

/// Rescale threshold: activities are halved (and the bump reset) once any
/// value would otherwise exceed this.
pub const ACTIVITY_MAX: f64 = 1e100;

/// Whether to default an unassigned atom to its last-seen polarity
/// (`true`) or to a fixed lean (`false`).
pub const PHASE_SAVING: bool = true;

/// Probability of leaning positive when phase saving has no prior value.
pub const POLARITY_LEAN: f64 = 0.0;

/// Luby-sequence unit used to schedule restarts, in conflicts.
pub const LUBY_UNIT: u32 = 128;

/// Whether restarts are permitted at all.
pub const RESTARTS_ENABLED: bool = true;
