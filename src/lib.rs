//! # guess-games
//!
//! Engines for two guessing games: a number game with difficulty tiers and
//! a hangman-style word game played through category word lists.
//!
//! ## Design Principles
//!
//! 1. **No Ambient State**: Rounds and sessions are values owned by the
//!    caller. Any number of them can run side by side.
//!
//! 2. **Pure Boundary**: Every operation is `(state, input) -> outcome`.
//!    Engines never render; a `Presenter` receives every change.
//!
//! 3. **Injectable Randomness**: Secrets are drawn through `RandomSource`,
//!    so tests and replays are deterministic.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `rules`: `RulesEngine` trait shared by both games
//! - `games`: Number and word game engines
//! - `driver`: Input commands, presenter contract, `Arcade` controller
//!
//! ## Example
//!
//! ```
//! use guess_games::core::{DifficultyTier, ScriptedSource};
//! use guess_games::games::number::{Direction, GuessOutcome, NumberGame};
//!
//! let mut game = NumberGame::new(ScriptedSource::new([10]));
//! let mut round = game.start(DifficultyTier::new(25, 7));
//!
//! assert_eq!(
//!     round.submit_guess("5"),
//!     Some(GuessOutcome::Hint { direction: Direction::TooLow, lives_remaining: 6 })
//! );
//! assert_eq!(round.submit_guess("10"), Some(GuessOutcome::Won { attempts: 2 }));
//! ```

pub mod core;
pub mod driver;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DatasetError, DifficultyTier, GameConfig, GameError, GameRng, RandomSource,
    ScriptedSource, TierConfig, WordConfig,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::number::{
    Direction, GuessOutcome, InvalidGuess, NumberGame, NumberSnapshot, RoundPhase, RoundState,
};

pub use crate::games::word::{
    AdvanceTicket, Advanced, Dataset, LetterOutcome, LetterReport, RoundProgress, Session,
    SessionId, SessionStatus, WordGame, WordRound, WordSnapshot,
};

pub use crate::driver::{
    ActiveGame, Arcade, EventLog, InputCommand, Outcome, Presenter, PresenterEvent, RoundSnapshot,
};
