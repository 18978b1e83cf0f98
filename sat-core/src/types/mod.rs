//! Error types shared across the library.

pub mod err;
