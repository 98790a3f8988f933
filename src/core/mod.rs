//! Core engine types: randomness, configuration, errors.
//!
//! This module contains the building blocks shared by both games.
//! Hosts configure the games via `GameConfig` rather than modifying them.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DifficultyTier, GameConfig, TierConfig, WordConfig};
pub use error::{ConfigError, DatasetError, GameError};
pub use rng::{GameRng, RandomSource, ScriptedSource};
