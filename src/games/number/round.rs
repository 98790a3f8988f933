//! Number-game round state and guess evaluation.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::DifficultyTier;

/// Which side of the secret a wrong guess fell on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The guess was below the secret.
    TooLow,
    /// The guess was above the secret.
    TooHigh,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::TooLow => write!(f, "too low"),
            Direction::TooHigh => write!(f, "too high"),
        }
    }
}

/// Why a guess was rejected without being counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidGuess {
    /// The text is not an integer.
    NotANumber,
    /// The integer lies outside `min..=max`.
    OutOfRange {
        /// Smallest accepted guess.
        min: u32,
        /// Largest accepted guess.
        max: u32,
    },
}

/// Tagged result of one `submit_guess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Rejected input. Nothing changed.
    Invalid(InvalidGuess),
    /// Wrong guess with lives to spare.
    Hint {
        /// Where the guess fell relative to the secret.
        direction: Direction,
        /// Lives left after this guess.
        lives_remaining: u32,
    },
    /// The guess matched the secret.
    Won {
        /// Accepted guesses in the round, this one included.
        attempts: usize,
    },
    /// The last life was spent.
    Lost {
        /// The secret, revealed.
        secret: u32,
    },
}

impl GuessOutcome {
    /// Check if this outcome ends the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. } | GuessOutcome::Lost { .. })
    }
}

/// Lifecycle of a started round.
///
/// `NotStarted` is represented by the absence of a `RoundState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Accepting guesses.
    Active,
    /// Secret found.
    Won,
    /// Lives exhausted.
    Lost,
}

/// One round of the number game.
///
/// Created by `NumberGame::start`, mutated only by `submit_guess`.
///
/// ## Invariants
///
/// - `1 <= secret <= tier.upper_bound`
/// - `0 <= lives_remaining <= tier.starting_lives`, never increasing
/// - `history` holds exactly the accepted guesses, in order
/// - Once inactive, no guess is accepted
#[derive(Clone, Debug)]
pub struct RoundState {
    tier: DifficultyTier,
    secret: u32,
    lives_remaining: u32,
    active: bool,
    history: Vector<u32>,
}

impl RoundState {
    pub(crate) fn new(tier: DifficultyTier, secret: u32) -> Self {
        debug_assert!((1..=tier.upper_bound).contains(&secret));

        Self {
            tier,
            secret,
            lives_remaining: tier.starting_lives,
            active: true,
            history: Vector::new(),
        }
    }

    /// The tier this round was started with.
    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Largest accepted guess.
    #[must_use]
    pub fn upper_bound(&self) -> u32 {
        self.tier.upper_bound
    }

    /// The secret. Hosts should only show this after the round ends.
    #[must_use]
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Lives left.
    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// Whether guesses are still accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accepted guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<u32> {
        &self.history
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.active {
            RoundPhase::Active
        } else if self.history.last() == Some(&self.secret) {
            RoundPhase::Won
        } else {
            RoundPhase::Lost
        }
    }

    /// Evaluate a guess typed by the player.
    ///
    /// Returns `None` when the round is over; the guess is ignored.
    /// Invalid input returns `Some(GuessOutcome::Invalid(_))` and leaves
    /// the state untouched.
    #[instrument(skip(self), fields(lives = self.lives_remaining))]
    pub fn submit_guess(&mut self, text: &str) -> Option<GuessOutcome> {
        if !self.active {
            debug!("Round is over, ignoring guess");
            return None;
        }

        let guess = match self.parse_guess(text) {
            Ok(guess) => guess,
            Err(reason) => {
                debug!(?reason, "Rejected guess");
                return Some(GuessOutcome::Invalid(reason));
            }
        };

        self.history.push_back(guess);

        if guess == self.secret {
            self.active = false;
            info!(attempts = self.history.len(), "Secret found");
            return Some(GuessOutcome::Won {
                attempts: self.history.len(),
            });
        }

        self.lives_remaining = self.lives_remaining.saturating_sub(1);

        if self.lives_remaining == 0 {
            self.active = false;
            info!(secret = self.secret, "Out of lives");
            return Some(GuessOutcome::Lost {
                secret: self.secret,
            });
        }

        let direction = if guess < self.secret {
            Direction::TooLow
        } else {
            Direction::TooHigh
        };
        debug!(guess, %direction, lives = self.lives_remaining, "Wrong guess");

        Some(GuessOutcome::Hint {
            direction,
            lives_remaining: self.lives_remaining,
        })
    }

    /// Read the leading integer of `text`, ignoring anything after it.
    ///
    /// `"4.5"` reads as 4 and `"12abc"` as 12. Input with no leading
    /// digits is `NotANumber`.
    fn parse_guess(&self, text: &str) -> Result<u32, InvalidGuess> {
        let out_of_range = InvalidGuess::OutOfRange {
            min: 1,
            max: self.tier.upper_bound,
        };

        let text = text.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
        let digits = &unsigned[..end];

        if digits.is_empty() {
            return Err(InvalidGuess::NotANumber);
        }
        if negative {
            return Err(out_of_range);
        }

        // Only overflow can fail here; the run is all ASCII digits
        let value: u64 = digits.parse().map_err(|_| out_of_range)?;
        u32::try_from(value)
            .ok()
            .filter(|v| (1..=self.tier.upper_bound).contains(v))
            .ok_or(out_of_range)
    }

    /// Player-safe view of the round.
    #[must_use]
    pub fn snapshot(&self) -> NumberSnapshot {
        NumberSnapshot {
            upper_bound: self.tier.upper_bound,
            starting_lives: self.tier.starting_lives,
            lives_remaining: self.lives_remaining,
            phase: self.phase(),
            history: self.history.clone(),
        }
    }
}

/// What a presenter may show about a number round.
///
/// Omits the secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSnapshot {
    /// Largest accepted guess.
    pub upper_bound: u32,
    /// Lives at round start.
    pub starting_lives: u32,
    /// Lives left.
    pub lives_remaining: u32,
    /// Current phase.
    pub phase: RoundPhase,
    /// Accepted guesses, oldest first.
    pub history: Vector<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(upper_bound: u32, lives: u32, secret: u32) -> RoundState {
        RoundState::new(DifficultyTier::new(upper_bound, lives), secret)
    }

    #[test]
    fn test_new_round() {
        let state = round(25, 7, 10);

        assert_eq!(state.lives_remaining(), 7);
        assert!(state.is_active());
        assert!(state.history().is_empty());
        assert_eq!(state.phase(), RoundPhase::Active);
    }

    #[test]
    fn test_hint_directions() {
        let mut state = round(25, 7, 10);

        assert_eq!(
            state.submit_guess("5"),
            Some(GuessOutcome::Hint {
                direction: Direction::TooLow,
                lives_remaining: 6
            })
        );
        assert_eq!(
            state.submit_guess("20"),
            Some(GuessOutcome::Hint {
                direction: Direction::TooHigh,
                lives_remaining: 5
            })
        );
    }

    #[test]
    fn test_invalid_leaves_state_alone() {
        let mut state = round(25, 7, 10);

        for text in ["abc", "", "  ", "-", "+", "x12", ".5"] {
            assert_eq!(
                state.submit_guess(text),
                Some(GuessOutcome::Invalid(InvalidGuess::NotANumber)),
                "input {text:?}"
            );
        }
        for text in ["0", "-3", "-3abc", "26", "26.5", "99999999999999999999999"] {
            assert_eq!(
                state.submit_guess(text),
                Some(GuessOutcome::Invalid(InvalidGuess::OutOfRange { min: 1, max: 25 })),
                "input {text:?}"
            );
        }

        assert_eq!(state.lives_remaining(), 7);
        assert!(state.history().is_empty());
        assert!(state.is_active());
    }

    #[test]
    fn test_leading_integer_is_read() {
        let mut state = round(25, 7, 4);
        assert_eq!(state.submit_guess("4.5"), Some(GuessOutcome::Won { attempts: 1 }));

        let mut state = round(25, 7, 10);
        assert_eq!(
            state.submit_guess("12abc"),
            Some(GuessOutcome::Hint {
                direction: Direction::TooHigh,
                lives_remaining: 6
            })
        );
        assert_eq!(
            state.submit_guess("1e3"),
            Some(GuessOutcome::Hint {
                direction: Direction::TooLow,
                lives_remaining: 5
            })
        );
        assert_eq!(state.submit_guess("+10 apples"), Some(GuessOutcome::Won { attempts: 3 }));
        assert_eq!(state.history().iter().copied().collect::<Vec<_>>(), vec![12, 1, 10]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut state = round(25, 7, 10);
        assert_eq!(state.submit_guess(" 10\n"), Some(GuessOutcome::Won { attempts: 1 }));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut state = round(25, 7, 10);
        assert!(matches!(state.submit_guess("1"), Some(GuessOutcome::Hint { .. })));
        assert!(matches!(state.submit_guess("25"), Some(GuessOutcome::Hint { .. })));
        assert_eq!(state.history().iter().copied().collect::<Vec<_>>(), vec![1, 25]);
    }

    #[test]
    fn test_win() {
        let mut state = round(25, 7, 10);
        state.submit_guess("3");

        assert_eq!(state.submit_guess("10"), Some(GuessOutcome::Won { attempts: 2 }));
        assert!(!state.is_active());
        assert_eq!(state.phase(), RoundPhase::Won);
        // Winning does not cost a life
        assert_eq!(state.lives_remaining(), 6);
    }

    #[test]
    fn test_loss() {
        let mut state = round(25, 2, 10);
        state.submit_guess("3");

        assert_eq!(state.submit_guess("4"), Some(GuessOutcome::Lost { secret: 10 }));
        assert_eq!(state.lives_remaining(), 0);
        assert_eq!(state.phase(), RoundPhase::Lost);
    }

    #[test]
    fn test_guess_after_end_is_ignored() {
        let mut state = round(25, 1, 10);
        state.submit_guess("3");

        assert_eq!(state.submit_guess("10"), None);
        assert_eq!(state.submit_guess("abc"), None);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.phase(), RoundPhase::Lost);
    }

    #[test]
    fn test_repeated_guess_still_costs_a_life() {
        let mut state = round(25, 7, 10);
        state.submit_guess("3");
        state.submit_guess("3");

        assert_eq!(state.lives_remaining(), 5);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_snapshot_hides_secret() {
        let mut state = round(25, 7, 10);
        state.submit_guess("12");

        let snapshot = state.snapshot();
        assert_eq!(snapshot.upper_bound, 25);
        assert_eq!(snapshot.starting_lives, 7);
        assert_eq!(snapshot.lives_remaining, 6);
        assert_eq!(snapshot.phase, RoundPhase::Active);
        assert_eq!(snapshot.history.iter().copied().collect::<Vec<_>>(), vec![12]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(GuessOutcome::Won { attempts: 1 }.is_terminal());
        assert!(GuessOutcome::Lost { secret: 4 }.is_terminal());
        assert!(!GuessOutcome::Invalid(InvalidGuess::NotANumber).is_terminal());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::TooLow.to_string(), "too low");
        assert_eq!(Direction::TooHigh.to_string(), "too high");
    }
}
