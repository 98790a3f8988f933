//! Number game engine.

use tracing::{debug, instrument};

use crate::core::{DifficultyTier, GameRng, RandomSource};
use crate::rules::{GameResult, RulesEngine};

use super::round::{GuessOutcome, RoundPhase, RoundState};

/// Starts number-game rounds and evaluates guesses.
///
/// Owns the random source; every round it starts is an independent value
/// owned by the caller.
#[derive(Clone, Debug)]
pub struct NumberGame<R = GameRng> {
    rng: R,
}

impl<R: RandomSource> NumberGame<R> {
    /// Create an engine drawing secrets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Start a round: draw the secret from `1..=upper_bound` and set full lives.
    #[instrument(skip(self))]
    pub fn start(&mut self, tier: DifficultyTier) -> RoundState {
        let secret = self.rng.draw_inclusive(1, tier.upper_bound);
        debug!(secret, "Round started");
        RoundState::new(tier, secret)
    }
}

impl<R> RulesEngine for NumberGame<R> {
    type State = RoundState;
    type Input = str;
    type Outcome = GuessOutcome;

    fn apply(&self, state: &mut RoundState, input: &str) -> Option<GuessOutcome> {
        state.submit_guess(input)
    }

    fn is_terminal(&self, state: &RoundState) -> Option<GameResult> {
        match state.phase() {
            RoundPhase::Active => None,
            RoundPhase::Won => Some(GameResult::Won),
            RoundPhase::Lost => Some(GameResult::Lost),
        }
    }

    fn answer(&self, state: &RoundState) -> Option<String> {
        self.is_terminal(state).map(|_| state.secret().to_string())
    }
}
