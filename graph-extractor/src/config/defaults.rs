//! Default values for [Config](super::Config), broken out so the CLI layer
//! can reference the same constants the struct uses, following
//! `sat_core::config::defaults`'s convention.

/// Default worker count (spec §6 CLI surface: `-t N`, default 1).
pub const WORKER_COUNT: usize = 1;

/// Default backbone algorithm: attention-based (spec §4.2.a), the variant
/// expected to make fewer SAT calls.
pub const ALGORITHM: super::Algorithm = super::Algorithm::Attention;

/// `-k` is accepted but unused by this core; see SPEC_FULL.md §2.
pub const KEEP_INTERMEDIATE: bool = false;
