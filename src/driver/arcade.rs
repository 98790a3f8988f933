//! Controller wiring input commands to the engines and the presenter.

use tracing::{debug, error, info, instrument, warn};

use crate::core::{DatasetError, GameConfig, GameError, GameRng, RandomSource};
use crate::games::number::{NumberGame, RoundState};
use crate::games::word::{Advanced, AdvanceTicket, Dataset, RoundProgress, Session, WordGame};
use crate::rules::{GameResult, RulesEngine};

use super::command::InputCommand;
use super::presenter::{Outcome, Presenter, RoundSnapshot};

/// The game currently being played.
#[derive(Clone, Debug, Default)]
pub enum ActiveGame {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// A number round.
    Number(RoundState),
    /// A word session.
    Word(Session),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Selection {
    Tier(String),
    Category(String),
}

/// Single-player controller for both games.
///
/// Processes one `InputCommand` at a time to completion and reports every
/// change to the presenter. The post-win pause in the word game is exposed
/// as a pending `AdvanceTicket`; the host waits `ticket.delay()` and calls
/// `complete_advance`. Any new selection or restart cancels the ticket.
#[derive(Debug)]
pub struct Arcade<P, R = GameRng> {
    config: GameConfig,
    number: NumberGame<R>,
    words: Option<WordGame>,
    active: ActiveGame,
    last_selection: Option<Selection>,
    pending: Option<AdvanceTicket>,
    presenter: P,
}

impl<P: Presenter, R: RandomSource> Arcade<P, R> {
    /// Create a controller. The word game stays unavailable until
    /// `load_dataset` succeeds.
    ///
    /// Fails if `config` does not pass `GameConfig::validate`.
    pub fn new(config: GameConfig, rng: R, presenter: P) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            config,
            number: NumberGame::new(rng),
            words: None,
            active: ActiveGame::Idle,
            last_selection: None,
            pending: None,
            presenter,
        })
    }

    /// Install the word dataset, or surface why it failed to load.
    ///
    /// On failure the word game stays unavailable; there is no retry.
    pub fn load_dataset(&mut self, loaded: Result<Dataset, DatasetError>) -> Result<(), GameError> {
        match loaded {
            Ok(dataset) => {
                let game = WordGame::new(dataset, self.config.word.clone())?;
                let names = game.category_names();
                info!(categories = names.len(), "Word dataset ready");
                self.presenter.on_categories_available(&names);
                self.words = Some(game);
                Ok(())
            }
            Err(err) => {
                error!(%err, "Word dataset failed to load");
                Err(err.into())
            }
        }
    }

    /// Process one input command.
    ///
    /// Only selections can fail; guesses that do not apply to the current
    /// game are ignored.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: InputCommand) -> Result<(), GameError> {
        match command {
            InputCommand::SelectTier(name) => self.select_tier(&name),
            InputCommand::SelectCategory(name) => self.select_category(&name),
            InputCommand::SubmitGuess(text) => {
                self.submit_guess(&text);
                Ok(())
            }
            InputCommand::GuessLetter(letter) => {
                self.guess_letter(letter);
                Ok(())
            }
            InputCommand::Restart => self.restart(),
        }
    }

    fn select_tier(&mut self, name: &str) -> Result<(), GameError> {
        let tier = self.config.tier(name)?;

        self.pending = None;
        let round = self.number.start(tier);
        self.presenter.on_round_start(&RoundSnapshot::Number(round.snapshot()));

        self.active = ActiveGame::Number(round);
        self.last_selection = Some(Selection::Tier(name.to_string()));
        Ok(())
    }

    fn select_category(&mut self, name: &str) -> Result<(), GameError> {
        let words = self.words.as_mut().ok_or(GameError::DatasetUnavailable)?;
        let session = words.select_category(name)?;

        self.pending = None;
        match words.is_terminal(&session) {
            // Nothing to guess in this category
            Some(result) => self.presenter.on_session_end(result, None),
            None => {
                if let Some(snapshot) = session.snapshot() {
                    self.presenter.on_round_start(&RoundSnapshot::Word(snapshot));
                }
            }
        }

        self.active = ActiveGame::Word(session);
        self.last_selection = Some(Selection::Category(name.to_string()));
        Ok(())
    }

    fn submit_guess(&mut self, text: &str) {
        let ActiveGame::Number(round) = &mut self.active else {
            debug!("No number round, ignoring guess");
            return;
        };
        let Some(outcome) = self.number.apply(round, text) else {
            return;
        };

        let snapshot = RoundSnapshot::Number(round.snapshot());
        self.presenter.on_guess_outcome(&Outcome::Number(outcome), &snapshot);

        if let Some(result) = self.number.is_terminal(round) {
            let reveal = match result {
                GameResult::Lost => self.number.answer(round),
                GameResult::Won => None,
            };
            self.presenter.on_session_end(result, reveal.as_deref());
        }
    }

    fn guess_letter(&mut self, letter: char) {
        let (ActiveGame::Word(session), Some(words)) = (&mut self.active, self.words.as_ref())
        else {
            debug!("No word session, ignoring letter");
            return;
        };
        let Some(report) = words.apply(session, &letter) else {
            return;
        };

        if matches!(report.progress, RoundProgress::WordWon { .. }) {
            self.pending = session.advance_ticket();
        }

        if let Some(snapshot) = session.snapshot() {
            self.presenter
                .on_guess_outcome(&Outcome::Word(report), &RoundSnapshot::Word(snapshot));
        }

        if let Some(result) = words.is_terminal(session) {
            let reveal = words.answer(session);
            self.presenter.on_session_end(result, reveal.as_deref());
        }
    }

    fn restart(&mut self) -> Result<(), GameError> {
        self.pending = None;

        match self.last_selection.clone() {
            Some(Selection::Tier(name)) => self.select_tier(&name),
            Some(Selection::Category(name)) => self.select_category(&name),
            None => {
                debug!("Nothing to restart");
                Ok(())
            }
        }
    }

    /// The scheduled post-win advance, if one is pending.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending
    }

    /// Run a scheduled advance.
    ///
    /// Returns `false` if the ticket was cancelled (by a restart or new
    /// selection) or has already been used.
    #[instrument(skip(self))]
    pub fn complete_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if self.pending != Some(ticket) {
            warn!("Advance ticket was cancelled");
            return false;
        }
        self.pending = None;

        let ActiveGame::Word(session) = &mut self.active else {
            return false;
        };

        match session.advance(ticket) {
            Some(Advanced::NextWord) => {
                if let Some(snapshot) = session.snapshot() {
                    self.presenter.on_round_start(&RoundSnapshot::Word(snapshot));
                }
                true
            }
            Some(Advanced::CategoryCleared) => {
                self.presenter.on_session_end(GameResult::Won, None);
                true
            }
            None => false,
        }
    }

    /// The game currently being played.
    #[must_use]
    pub fn active(&self) -> &ActiveGame {
        &self.active
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The word engine, once a dataset has loaded.
    #[must_use]
    pub fn word_game(&self) -> Option<&WordGame> {
        self.words.as_ref()
    }

    /// Get the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the controller, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
