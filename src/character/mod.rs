//! Hero stat derivation and the superpower buff.

pub mod derived_stats;
pub mod superpower;

pub use derived_stats::*;
pub use superpower::*;
