//! Word-guessing game.
//!
//! A player picks a category from the `Dataset` and plays its words in
//! order. Each word is a `WordRound`: letters are guessed, every
//! occurrence is revealed, and wrong letters cost lives. Solving a word
//! moves the `Session` to the next one after a pause; losing any word
//! ends the session.

mod dataset;
mod game;
mod round;
mod session;

pub use dataset::{Category, Dataset};
pub use game::WordGame;
pub use round::{LetterOutcome, RoundStatus, WordRound};
pub use session::{
    AdvanceTicket, Advanced, LetterReport, RoundProgress, Session, SessionId, SessionStatus,
    WordSnapshot,
};
