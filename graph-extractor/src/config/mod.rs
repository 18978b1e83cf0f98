/*!
Configuration of an [Analysis](crate::analysis::Analysis) run, following the
shape of `sat_core::config::Config`: a single struct with a `Default` impl,
documented knobs, and a sibling `defaults` module.
*/

use std::path::PathBuf;

pub mod defaults;

/// Which backbone algorithm of spec §4.2 to run. Both are required to
/// produce equal edge sets (spec §8's attention/plain equivalence); this
/// only trades SAT-call count for engine simplicity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// §4.2.a: bumps activity on surviving candidates after each SAT witness.
    Attention,
    /// §4.2.b: identical, without the activity bump.
    Plain,
}

/// The driver-level knobs exposed by the CLI (spec §6).
#[derive(Clone, Debug)]
pub struct Config {
    /// Requested worker count (`-t`). Validated against hardware
    /// parallelism by [validate](Config::validate); spec §4.4 step 1.
    pub workers: usize,

    /// Output directory (`-o`). `None` means "alongside the input file".
    pub output_dir: Option<PathBuf>,

    /// `-k`: kept for CLI-interface compatibility with the external
    /// encoder front-end; a no-op in this core (SPEC_FULL.md §2).
    pub keep_intermediate: bool,

    /// Which backbone engine variant to run.
    pub algorithm: Algorithm,

    /// Tuning knobs forwarded to every worker's [sat_core::Context].
    pub solver: sat_core::Config,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workers: defaults::WORKER_COUNT,
            output_dir: None,
            keep_intermediate: defaults::KEEP_INTERMEDIATE,
            algorithm: defaults::ALGORITHM,
            solver: sat_core::Config::default(),
        }
    }
}

impl Config {
    /// Spec §4.4 step 1: `1 <= workers <= hardware parallelism` is
    /// mandatory; exceeding it is a fatal configuration error, not silently
    /// clamped.
    pub fn validate(&self) -> Result<(), crate::types::err::ConfigError> {
        use crate::types::err::ConfigError;

        if self.workers < 1 {
            return Err(ConfigError::ZeroWorkers);
        }
        let available = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        if self.workers > available {
            return Err(ConfigError::TooManyWorkers {
                requested: self.workers,
                available,
            });
        }
        Ok(())
    }
}
