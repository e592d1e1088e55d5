//! Async session runtime (feature `runtime`).

pub mod actor;

pub use actor::{Command, SessionActor, SessionHandle};
