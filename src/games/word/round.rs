//! A single word round: reveal mask, lives and guessed letters.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

/// Tagged result of one `guess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterOutcome {
    /// The letter occurs in the word; every occurrence is now revealed.
    Correct {
        /// The guessed letter, uppercased.
        letter: char,
        /// Positions revealed by this guess.
        revealed: usize,
    },
    /// The letter does not occur; one life was spent.
    Incorrect {
        /// The guessed letter, uppercased.
        letter: char,
        /// Lives left after this guess.
        lives_remaining: u32,
    },
    /// The letter was already tried this round. Nothing changed.
    AlreadyGuessed {
        /// The guessed letter, uppercased.
        letter: char,
    },
    /// The input is not a single letter. Nothing changed.
    NotALetter {
        /// The raw input.
        input: char,
    },
}

/// Status of a word round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Accepting guesses.
    Active,
    /// Every letter is revealed.
    Won,
    /// Lives exhausted with letters still hidden.
    Lost,
}

#[derive(Clone, Copy, Debug)]
struct Cell {
    ch: char,
    revealed: bool,
}

/// One word being guessed.
///
/// Only alphabetic characters are hidden. Spaces, hyphens and other
/// symbols in the word are revealed from the start.
///
/// ## Invariants
///
/// - A letter cell is hidden iff its letter has not been guessed
/// - `lives_remaining` never increases
/// - No guess is accepted once the round is won or lost
#[derive(Clone, Debug)]
pub struct WordRound {
    target: String,
    cells: SmallVec<[Cell; 16]>,
    lives_remaining: u32,
    starting_lives: u32,
    guessed: FxHashSet<char>,
}

impl WordRound {
    /// Start a round for `word` with full lives.
    pub fn new(word: &str, starting_lives: u32) -> Self {
        let target = word.to_uppercase();
        let cells = target
            .chars()
            .map(|ch| Cell {
                ch,
                revealed: !ch.is_alphabetic(),
            })
            .collect();

        Self {
            target,
            cells,
            lives_remaining: starting_lives,
            starting_lives,
            guessed: FxHashSet::default(),
        }
    }

    /// The uppercased target word.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Lives left.
    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    /// Lives at round start.
    #[must_use]
    pub fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    /// Check if a letter was already tried this round.
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        normalize(letter).is_some_and(|l| self.guessed.contains(&l))
    }

    /// Letters tried this round, sorted.
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Per-position view: `Some(ch)` if visible, `None` if hidden.
    pub fn mask(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().map(|c| c.revealed.then_some(c.ch))
    }

    /// The mask as a string with `placeholder` for hidden cells.
    #[must_use]
    pub fn render(&self, placeholder: char) -> String {
        self.mask().map(|c| c.unwrap_or(placeholder)).collect()
    }

    /// Check if every letter is revealed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.revealed)
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_solved() {
            RoundStatus::Won
        } else if self.lives_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        }
    }

    /// Evaluate a letter.
    ///
    /// Returns `None` once the round is over. Repeating a letter is
    /// harmless: it returns `AlreadyGuessed` and changes nothing.
    #[instrument(skip(self), fields(lives = self.lives_remaining))]
    pub fn guess(&mut self, letter: char) -> Option<LetterOutcome> {
        if self.status() != RoundStatus::Active {
            debug!("Round is over, ignoring letter");
            return None;
        }

        let Some(letter) = normalize(letter) else {
            return Some(LetterOutcome::NotALetter { input: letter });
        };

        if !self.guessed.insert(letter) {
            return Some(LetterOutcome::AlreadyGuessed { letter });
        }

        let mut revealed = 0;
        for cell in self.cells.iter_mut().filter(|c| c.ch == letter) {
            cell.revealed = true;
            revealed += 1;
        }

        if revealed > 0 {
            debug!(%letter, revealed, "Correct letter");
            Some(LetterOutcome::Correct { letter, revealed })
        } else {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            debug!(%letter, lives = self.lives_remaining, "Incorrect letter");
            Some(LetterOutcome::Incorrect {
                letter,
                lives_remaining: self.lives_remaining,
            })
        }
    }
}

/// Uppercase a single alphabetic character.
///
/// Characters whose uppercase form is more than one character are rejected.
fn normalize(letter: char) -> Option<char> {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Some(ch),
        _ => None,
    }
}
