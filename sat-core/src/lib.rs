/*!
A small two-watched-literal CDCL SAT solver, exposing the minimal adapter a
backbone-enumeration engine needs: [Context::add_clause], [Context::solve],
[Context::value] and [Context::bump_activity].

The module layout follows `otter_sat`: clause/atom storage under [db], the
solving algorithm split into independent [procedures], and the public
[Context] tying them together.
*/

pub mod config;
pub mod context;
pub mod counters;
pub mod db;
pub mod generic;
pub mod procedures;
pub mod structures;
pub mod types;

pub use config::Config;
pub use context::{Context, SolveResult};
pub use structures::atom::Atom;
pub use structures::literal::{CClause, CLiteral};
pub use types::err::{BuildError, ErrorKind, SolveError};
