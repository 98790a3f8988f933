//! Number-guessing game.
//!
//! - A difficulty tier fixes the range `1..=upper_bound` and the life count
//! - A secret is drawn from the injected `RandomSource` at round start
//! - Each wrong guess costs a life and yields a too-low/too-high hint
//! - Finding the secret wins; running out of lives loses

mod game;
mod round;

pub use game::NumberGame;
pub use round::{Direction, GuessOutcome, InvalidGuess, NumberSnapshot, RoundPhase, RoundState};
