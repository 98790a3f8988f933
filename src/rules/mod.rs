//! Rules engine trait for the guessing games.
//!
//! Games implement `RulesEngine` to define:
//! - How a guess modifies round state
//! - Win/loss conditions
//! - The answer revealed on loss
//!
//! The controller calls into `RulesEngine` but never interprets
//! game-specific outcomes directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
