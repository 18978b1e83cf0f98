//! The atomic unit a [literal](super::literal) is built from.

/// An atom (aka variable) is a positive integer in `1..=max_atom`.
///
/// Atom `0` is never assigned and is used as a sentinel in a few places
/// (e.g. an unused slot at the front of a dense, atom-indexed vector).
pub type Atom = u32;
