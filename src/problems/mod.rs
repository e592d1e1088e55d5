//! Arithmetic problems that gate digs and the superpower.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
