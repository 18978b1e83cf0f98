/*!
Error types, named in the style of `sat_core::types::err`: a union
[ErrorKind] wraps per-subsystem enums via `From`, mapped by the CLI onto the
exit codes of spec §6/§7.
*/

use std::fmt;
use std::path::PathBuf;

/// A union of every error kind this crate can raise, per spec §7.
#[derive(Debug)]
pub enum ErrorKind {
    /// File missing, header malformed, clause malformed, or the base
    /// formula is unsatisfiable (spec §7: UnsatFormula is surfaced as a
    /// LoadError).
    Load(LoadError),

    /// Requested worker count < 1 or exceeds hardware parallelism.
    Config(ConfigError),

    /// Unexpected failure inside the SAT core during an analysis solve.
    Solver(SolverError),

    /// Cannot create the output directory or write a result file.
    Output(OutputError),
}

impl ErrorKind {
    /// The process exit code this error maps to, per spec §6.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Load(_) | ErrorKind::Config(_) => 1,
            ErrorKind::Solver(_) | ErrorKind::Output(_) => 2,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Load(e) => write!(f, "{e}"),
            ErrorKind::Config(e) => write!(f, "{e}"),
            ErrorKind::Solver(e) => write!(f, "{e}"),
            ErrorKind::Output(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors while reading a DIMACS file into a [CnfFormula](crate::model::CnfFormula).
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    MissingHeader,
    DuplicateHeader { line: usize },
    MalformedHeader { line: usize },
    MalformedClause { line: usize, token: String },
    ClauseAfterTerminator { line: usize },
    /// The base formula (no assumptions) has no model. Spec §7: surfaced to
    /// callers as a `LoadError`, not an `AnalysisError`.
    Unsatisfiable,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "could not read {}: {source}", path.display()),
            LoadError::MissingHeader => write!(f, "no `p cnf V C` problem header found"),
            LoadError::DuplicateHeader { line } => write!(f, "line {line}: a second problem header is not allowed"),
            LoadError::MalformedHeader { line } => write!(f, "line {line}: malformed problem header"),
            LoadError::MalformedClause { line, token } => {
                write!(f, "line {line}: malformed clause literal `{token}`")
            }
            LoadError::ClauseAfterTerminator { line } => {
                write!(f, "line {line}: clause literal after the final terminator")
            }
            LoadError::Unsatisfiable => write!(f, "formula has no satisfying assignment"),
        }
    }
}

impl From<LoadError> for ErrorKind {
    fn from(e: LoadError) -> Self {
        ErrorKind::Load(e)
    }
}

/// Errors validating the parallel driver's configuration (spec §4.4 step 1).
#[derive(Debug)]
pub enum ConfigError {
    ZeroWorkers,
    TooManyWorkers { requested: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWorkers => write!(f, "worker count must be at least 1"),
            ConfigError::TooManyWorkers { requested, available } => write!(
                f,
                "requested {requested} workers, but only {available} are available"
            ),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// An unexpected failure inside the SAT core during an analysis solve
/// (spec §7: surfaced as an AnalysisError, distinct from a load-time
/// Unsatisfiable).
#[derive(Debug)]
pub struct SolverError(pub sat_core::ErrorKind);

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sat core error: {:?}", self.0)
    }
}

impl From<sat_core::ErrorKind> for ErrorKind {
    fn from(e: sat_core::ErrorKind) -> Self {
        ErrorKind::Solver(SolverError(e))
    }
}

/// Errors writing Pajek/text output files (spec §4.5).
#[derive(Debug)]
pub enum OutputError {
    CreateDir { path: PathBuf, source: std::io::Error },
    WriteFile { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::CreateDir { path, source } => {
                write!(f, "could not create output directory {}: {source}", path.display())
            }
            OutputError::WriteFile { path, source } => {
                write!(f, "could not write {}: {source}", path.display())
            }
        }
    }
}

impl From<OutputError> for ErrorKind {
    fn from(e: OutputError) -> Self {
        ErrorKind::Output(e)
    }
}
