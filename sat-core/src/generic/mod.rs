//! Generic data structures used internally, independent of SAT-specific types.

pub mod index_heap;
pub mod luby;
