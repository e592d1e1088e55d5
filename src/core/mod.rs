//! Core game state and logic.

pub mod constants;
pub mod engine;
pub mod game_state;
pub mod progression;
pub mod scheduler;
pub mod settings;
pub mod tick;

pub use engine::{AnswerOutcome, DigReport, DigRequest, GameEngine, PendingChallenge};
pub use game_state::GameState;
pub use progression::FreeUpgrade;
pub use scheduler::{Action, Scheduler, Timings};
pub use settings::Settings;
pub use tick::TickEvent;
