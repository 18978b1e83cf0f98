/*!
Error types used by the library.

Named in the style of `otter_sat::types::err`: a union [ErrorKind] wraps
per-subsystem enums via `From`, so call sites can propagate with `?`
without losing which subsystem raised the error.
*/

/// A union of the varied error kinds a [Context](crate::context::Context) can raise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Raised when building the formula, before the first solve.
    Build(BuildError),

    /// Raised by an in-progress solve.
    Solve(SolveError),
}

/// Errors while adding clauses to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Adding this clause makes the formula trivially unsatisfiable (e.g. a
    /// unit clause contradicting an already-forced literal).
    Unsatisfiable,

    /// A clause was added after the context had already been solved once.
    ClauseAfterSolve,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during a solve call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// An assumption was requested for an atom outside `1..=max_atom`.
    UnknownAtom,
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}
