//! Word-game session: progression through a category's word list.
//!
//! ## Lifecycle
//!
//! ```text
//! InProgress --word solved--> AwaitingAdvance --advance--> InProgress (next word)
//!                                             --advance--> Won (list exhausted)
//! InProgress --lives exhausted--> Lost
//! ```
//!
//! `AwaitingAdvance` is the pause after a solved word. The host shows the
//! solved word, waits `AdvanceTicket::delay`, then calls `advance` with the
//! ticket. A ticket only works on the session and word it was issued for,
//! so a restart during the pause cannot move the new session.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use crate::core::WordConfig;

use super::round::{LetterOutcome, RoundStatus, WordRound};

/// Identity of one session. Never reused within a `WordGame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// A word round is accepting letters.
    InProgress,
    /// The current word was just solved; waiting for `advance`.
    AwaitingAdvance,
    /// Every word in the category was solved.
    Won,
    /// A word round was lost.
    Lost,
}

impl SessionStatus {
    /// Check if the session is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

/// How a letter guess left the current word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundProgress {
    /// The word is still being guessed.
    Continue,
    /// The word was solved. The session now awaits `advance`.
    WordWon {
        /// The solved word.
        word: String,
        /// Words solved so far, this one included.
        words_cleared: usize,
    },
    /// The word was lost, and with it the session.
    WordLost {
        /// The word, revealed.
        word: String,
    },
}

/// Result of one `guess_letter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterReport {
    /// What the letter did.
    pub outcome: LetterOutcome,
    /// Where that leaves the word.
    pub progress: RoundProgress,
}

/// Permission to perform one scheduled post-win advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    session: SessionId,
    word_index: usize,
    delay: Duration,
}

impl AdvanceTicket {
    /// Session the ticket was issued for.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// How long the host should wait before advancing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of a successful `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advanced {
    /// The next word is loaded.
    NextWord,
    /// No words remain; the session is won.
    CategoryCleared,
}

/// One play-through of a category.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    category: String,
    words: Vec<String>,
    word_index: usize,
    round_index: usize,
    round: Option<WordRound>,
    status: SessionStatus,
    starting_lives: u32,
    placeholder: char,
    advance_delay: Duration,
}

impl Session {
    /// Start a session at the first word of `words`.
    ///
    /// An empty list yields a session that is already won. `config` must
    /// already be validated; `WordGame::new` does that.
    pub(crate) fn new(
        id: SessionId,
        category: impl Into<String>,
        words: Vec<String>,
        config: &WordConfig,
    ) -> Self {
        let mut session = Self {
            id,
            category: category.into(),
            words,
            word_index: 0,
            round_index: 0,
            round: None,
            status: SessionStatus::InProgress,
            starting_lives: config.starting_lives,
            placeholder: config.placeholder,
            advance_delay: config.advance_delay(),
        };
        session.load_word_round();
        session
    }

    /// Load the word at `word_index`, or finish the session if none remain.
    ///
    /// Words without any letter have nothing to guess and are skipped.
    fn load_word_round(&mut self) {
        while let Some(word) = self.words.get(self.word_index) {
            if word.chars().any(char::is_alphabetic) {
                debug!(session = %self.id, index = self.word_index, "Loading word");
                self.round = Some(WordRound::new(word, self.starting_lives));
                self.round_index = self.word_index;
                self.status = SessionStatus::InProgress;
                return;
            }
            warn!(
                session = %self.id,
                index = self.word_index,
                word = %word,
                "Skipping word with no letters"
            );
            self.word_index += 1;
        }

        info!(session = %self.id, category = %self.category, "Category cleared");
        self.status = SessionStatus::Won;
    }

    /// Session identity.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Category being played.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Index of the current word (equals the number of words solved).
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Number of words in the category.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The current round, or the last one played once the session ends.
    ///
    /// `None` when the word list had nothing to guess.
    #[must_use]
    pub fn round(&self) -> Option<&WordRound> {
        self.round.as_ref()
    }

    /// Guess a letter in the current word.
    ///
    /// Returns `None` unless the session is `InProgress`.
    #[instrument(skip(self), fields(session = %self.id, index = self.word_index))]
    pub fn guess_letter(&mut self, letter: char) -> Option<LetterReport> {
        if self.status != SessionStatus::InProgress {
            debug!(status = ?self.status, "Session not accepting letters");
            return None;
        }

        let round = self.round.as_mut()?;
        let outcome = round.guess(letter)?;

        let progress = match round.status() {
            RoundStatus::Active => RoundProgress::Continue,
            RoundStatus::Won => {
                self.word_index += 1;
                self.status = SessionStatus::AwaitingAdvance;
                info!(word = round.target(), cleared = self.word_index, "Word solved");
                RoundProgress::WordWon {
                    word: round.target().to_string(),
                    words_cleared: self.word_index,
                }
            }
            RoundStatus::Lost => {
                self.status = SessionStatus::Lost;
                info!(word = round.target(), "Word lost");
                RoundProgress::WordLost {
                    word: round.target().to_string(),
                }
            }
        };

        Some(LetterReport { outcome, progress })
    }

    /// Ticket for the pending post-win advance, if one is due.
    #[must_use]
    pub fn advance_ticket(&self) -> Option<AdvanceTicket> {
        (self.status == SessionStatus::AwaitingAdvance).then_some(AdvanceTicket {
            session: self.id,
            word_index: self.word_index,
            delay: self.advance_delay,
        })
    }

    /// Perform a scheduled advance.
    ///
    /// Returns `None` and changes nothing if the ticket was issued for a
    /// different session or word, or no advance is pending.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Option<Advanced> {
        if self.status != SessionStatus::AwaitingAdvance
            || ticket.session != self.id
            || ticket.word_index != self.word_index
        {
            debug!(?ticket, status = ?self.status, "Ignoring stale advance ticket");
            return None;
        }

        self.load_word_round();

        Some(match self.status {
            SessionStatus::Won => Advanced::CategoryCleared,
            _ => Advanced::NextWord,
        })
    }

    /// The hidden word, once the session is lost.
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        match self.status {
            SessionStatus::Lost => self.round.as_ref().map(WordRound::target),
            _ => None,
        }
    }

    /// Player-safe view of the current round.
    #[must_use]
    pub fn snapshot(&self) -> Option<WordSnapshot> {
        let round = self.round.as_ref()?;

        Some(WordSnapshot {
            category: self.category.clone(),
            word_number: self.round_index + 1,
            word_count: self.words.len(),
            mask: round.mask().collect(),
            placeholder: self.placeholder,
            lives_remaining: round.lives_remaining(),
            starting_lives: round.starting_lives(),
            guessed: round.guessed_letters(),
            status: self.status,
        })
    }
}

/// What a presenter may show about a word round.
///
/// Hidden letters are `None` in `mask`; the target itself is omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSnapshot {
    /// Category being played.
    pub category: String,
    /// 1-based position of the current word.
    pub word_number: usize,
    /// Words in the category.
    pub word_count: usize,
    /// Per-position view, `None` where hidden.
    pub mask: SmallVec<[Option<char>; 16]>,
    /// Symbol to draw for hidden positions.
    pub placeholder: char,
    /// Lives left.
    pub lives_remaining: u32,
    /// Lives at round start.
    pub starting_lives: u32,
    /// Letters tried this round, sorted.
    pub guessed: Vec<char>,
    /// Session status.
    pub status: SessionStatus,
}

impl WordSnapshot {
    /// The mask with placeholders, letters separated by spaces.
    #[must_use]
    pub fn masked(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2);
        for (i, cell) in self.mask.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell.unwrap_or(self.placeholder));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(words: &[&str]) -> Session {
        let config = WordConfig::default().with_advance_delay(Duration::from_millis(5));
        Session::new(
            SessionId::new(1),
            "Animals",
            words.iter().map(|w| w.to_string()).collect(),
            &config,
        )
    }

    #[test]
    fn test_new_session_loads_first_word() {
        let session = session(&["cat", "dog"]);

        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.word_index(), 0);
        assert_eq!(session.word_count(), 2);
        assert_eq!(session.round().unwrap().target(), "CAT");
        assert!(session.advance_ticket().is_none());
    }

    #[test]
    fn test_empty_list_is_won() {
        let mut session = session(&[]);

        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.round().is_none());
        assert!(session.snapshot().is_none());
        assert_eq!(session.guess_letter('A'), None);
    }

    #[test]
    fn test_word_won_awaits_advance() {
        let mut session = session(&["ox", "cat"]);
        session.guess_letter('O');
        let report = session.guess_letter('X').unwrap();

        assert_eq!(
            report.progress,
            RoundProgress::WordWon {
                word: "OX".to_string(),
                words_cleared: 1
            }
        );
        assert_eq!(session.status(), SessionStatus::AwaitingAdvance);
        assert_eq!(session.word_index(), 1);
        // Letters are ignored during the pause
        assert_eq!(session.guess_letter('C'), None);

        let ticket = session.advance_ticket().unwrap();
        assert_eq!(ticket.delay(), Duration::from_millis(5));
        assert_eq!(ticket.session(), SessionId::new(1));
        assert_eq!(session.advance(ticket), Some(Advanced::NextWord));
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.round().unwrap().target(), "CAT");
        assert_eq!(session.round().unwrap().lives_remaining(), 6);
    }

    #[test]
    fn test_last_word_clears_category() {
        let mut session = session(&["ox"]);
        session.guess_letter('O');
        session.guess_letter('X');

        let ticket = session.advance_ticket().unwrap();
        assert_eq!(session.advance(ticket), Some(Advanced::CategoryCleared));
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.advance_ticket().is_none());
    }

    #[test]
    fn test_ticket_used_twice_is_ignored() {
        let mut session = session(&["ox", "ox", "cat"]);
        session.guess_letter('O');
        session.guess_letter('X');
        let ticket = session.advance_ticket().unwrap();

        assert_eq!(session.advance(ticket), Some(Advanced::NextWord));
        assert_eq!(session.advance(ticket), None);
        assert_eq!(session.word_index(), 1);

        // A ticket for an older word stays dead even once a new advance is due
        session.guess_letter('O');
        session.guess_letter('X');
        assert_eq!(session.advance(ticket), None);
        assert_eq!(session.status(), SessionStatus::AwaitingAdvance);
    }

    #[test]
    fn test_ticket_from_other_session_is_ignored() {
        let mut first = session(&["ox"]);
        first.guess_letter('O');
        first.guess_letter('X');
        let ticket = first.advance_ticket().unwrap();

        let config = WordConfig::default();
        let mut second =
            Session::new(SessionId::new(2), "Animals", vec!["ox".to_string()], &config);
        second.guess_letter('O');
        second.guess_letter('X');

        assert_eq!(second.advance(ticket), None);
        assert_eq!(second.status(), SessionStatus::AwaitingAdvance);
    }

    #[test]
    fn test_word_lost_ends_session() {
        let config = WordConfig::default().with_starting_lives(1);
        let mut session =
            Session::new(SessionId::new(1), "Animals", vec!["dog".to_string()], &config);

        let report = session.guess_letter('X').unwrap();
        assert_eq!(
            report.progress,
            RoundProgress::WordLost {
                word: "DOG".to_string()
            }
        );
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.revealed_word(), Some("DOG"));
        assert_eq!(session.guess_letter('D'), None);
        assert!(session.advance_ticket().is_none());
    }

    #[test]
    fn test_letterless_words_are_skipped() {
        let mut session = session(&["42", "ox", "--"]);
        assert_eq!(session.word_index(), 1);
        assert_eq!(session.round().unwrap().target(), "OX");

        session.guess_letter('O');
        session.guess_letter('X');
        let ticket = session.advance_ticket().unwrap();
        assert_eq!(session.advance(ticket), Some(Advanced::CategoryCleared));
        assert_eq!(session.word_index(), 3);
    }

    #[test]
    fn test_snapshot() {
        let mut session = session(&["cat", "dog"]);
        session.guess_letter('a');
        session.guess_letter('z');

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.category, "Animals");
        assert_eq!(snapshot.word_number, 1);
        assert_eq!(snapshot.word_count, 2);
        assert_eq!(snapshot.masked(), "_ A _");
        assert_eq!(snapshot.lives_remaining, 5);
        assert_eq!(snapshot.starting_lives, 6);
        assert_eq!(snapshot.guessed, vec!['A', 'Z']);
        assert_eq!(snapshot.status, SessionStatus::InProgress);
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId::new(7).to_string(), "Session(7)");
        assert_eq!(SessionId::new(7).raw(), 7);
    }
}
