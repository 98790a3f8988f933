//! Presentation adapter contract.
//!
//! The engines never render. The `Arcade` reports every state change to a
//! `Presenter`, which is the only component that touches the screen.

use serde::{Deserialize, Serialize};

use crate::games::number::{GuessOutcome, NumberSnapshot};
use crate::games::word::{LetterReport, WordSnapshot};
use crate::rules::GameResult;

/// Player-safe view of a freshly started round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundSnapshot {
    /// A number round.
    Number(NumberSnapshot),
    /// A word round.
    Word(WordSnapshot),
}

/// Result of one guess in either game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A number guess.
    Number(GuessOutcome),
    /// A letter guess.
    Word(LetterReport),
}

/// Receives state changes to render.
pub trait Presenter {
    /// A round started (new tier, new category, or next word).
    fn on_round_start(&mut self, snapshot: &RoundSnapshot);

    /// A guess was evaluated.
    ///
    /// `snapshot` is the round after the guess.
    fn on_guess_outcome(&mut self, outcome: &Outcome, snapshot: &RoundSnapshot);

    /// The round (number) or session (word) ended.
    ///
    /// `reveal` carries the hidden answer after a loss.
    fn on_session_end(&mut self, result: GameResult, reveal: Option<&str>);

    /// The word dataset loaded.
    fn on_categories_available(&mut self, _names: &[String]) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn on_round_start(&mut self, snapshot: &RoundSnapshot) {
        (**self).on_round_start(snapshot);
    }

    fn on_guess_outcome(&mut self, outcome: &Outcome, snapshot: &RoundSnapshot) {
        (**self).on_guess_outcome(outcome, snapshot);
    }

    fn on_session_end(&mut self, result: GameResult, reveal: Option<&str>) {
        (**self).on_session_end(result, reveal);
    }

    fn on_categories_available(&mut self, names: &[String]) {
        (**self).on_categories_available(names);
    }
}

/// One recorded presenter call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenterEvent {
    /// `on_round_start`.
    RoundStarted(RoundSnapshot),
    /// `on_guess_outcome`.
    Guess {
        /// The outcome.
        outcome: Outcome,
        /// The round after the guess.
        snapshot: RoundSnapshot,
    },
    /// `on_session_end`.
    SessionEnded {
        /// Win or loss.
        result: GameResult,
        /// Hidden answer after a loss.
        reveal: Option<String>,
    },
    /// `on_categories_available`.
    CategoriesAvailable(Vec<String>),
}

/// Presenter that records every call.
///
/// Useful for tests, replays, and hosts that render from a queue.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<PresenterEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&PresenterEvent> {
        self.events.last()
    }

    /// Remove and return all events.
    pub fn drain(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Presenter for EventLog {
    fn on_round_start(&mut self, snapshot: &RoundSnapshot) {
        self.events.push(PresenterEvent::RoundStarted(snapshot.clone()));
    }

    fn on_guess_outcome(&mut self, outcome: &Outcome, snapshot: &RoundSnapshot) {
        self.events.push(PresenterEvent::Guess {
            outcome: outcome.clone(),
            snapshot: snapshot.clone(),
        });
    }

    fn on_session_end(&mut self, result: GameResult, reveal: Option<&str>) {
        self.events.push(PresenterEvent::SessionEnded {
            result,
            reveal: reveal.map(str::to_string),
        });
    }

    fn on_categories_available(&mut self, names: &[String]) {
        self.events.push(PresenterEvent::CategoriesAvailable(names.to_vec()));
    }
}
