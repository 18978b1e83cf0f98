//! The algorithm a solve is factored into, following `otter_sat::procedures`.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod schedulers;
