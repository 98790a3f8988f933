//! Word game engine.

use tracing::{info, instrument};

use crate::core::{GameError, WordConfig};
use crate::rules::{GameResult, RulesEngine};

use super::dataset::Dataset;
use super::session::{LetterReport, Session, SessionId, SessionStatus};

/// Owns the dataset and hands out sessions.
#[derive(Clone, Debug)]
pub struct WordGame {
    dataset: Dataset,
    config: WordConfig,
    next_session: u64,
}

impl WordGame {
    /// Create an engine over a loaded dataset.
    ///
    /// Fails if `config` does not pass `WordConfig::validate`.
    pub fn new(dataset: Dataset, config: WordConfig) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            dataset,
            config,
            next_session: 0,
        })
    }

    /// Get the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Get the word settings.
    pub fn config(&self) -> &WordConfig {
        &self.config
    }

    /// Category names in menu order.
    pub fn category_names(&self) -> Vec<String> {
        self.dataset.category_names().map(str::to_string).collect()
    }

    /// Start a session over a category's words.
    ///
    /// Every call yields a session with a fresh `SessionId`.
    #[instrument(skip(self))]
    pub fn select_category(&mut self, name: &str) -> Result<Session, GameError> {
        let words = self
            .dataset
            .words(name)
            .ok_or_else(|| GameError::CategoryNotFound {
                name: name.to_string(),
            })?
            .to_vec();

        let id = SessionId::new(self.next_session);
        self.next_session += 1;

        info!(%id, words = words.len(), "Session started");
        Ok(Session::new(id, name, words, &self.config))
    }
}

impl RulesEngine for WordGame {
    type State = Session;
    type Input = char;
    type Outcome = LetterReport;

    fn apply(&self, state: &mut Session, input: &char) -> Option<LetterReport> {
        state.guess_letter(*input)
    }

    fn is_terminal(&self, state: &Session) -> Option<GameResult> {
        match state.status() {
            SessionStatus::Won => Some(GameResult::Won),
            SessionStatus::Lost => Some(GameResult::Lost),
            SessionStatus::InProgress | SessionStatus::AwaitingAdvance => None,
        }
    }

    fn answer(&self, state: &Session) -> Option<String> {
        state.revealed_word().map(str::to_string)
    }
}
