//! Game logic for Rock-Paper-Scissors
//!
//! Core rules and session bookkeeping for the browser game.
//! This crate is compiled to:
//! - Native (for tests and tooling)
//! - WASM (for the frontend)
//!
//! All game state lives here; the frontend renders from the immutable
//! snapshot returned by each session transition.

mod error;
mod random;
mod rules;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{GameError, GameResult};
pub use random::{MoveSource, ScriptedMoves, UniformDraw};
pub use rules::{resolve, Move, Outcome};
pub use session::{GameSession, RoundRecord, RoundSummary, SessionStats};
