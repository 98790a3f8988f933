//! Line-oriented presenter for the terminal.

use guess_games::{
    GameResult, GuessOutcome, InvalidGuess, LetterOutcome, Outcome, Presenter, RoundProgress,
    RoundSnapshot,
};

/// Prints game events to stdout.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    finished: bool,
}

impl TerminalPresenter {
    /// Whether the last round or session has ended.
    pub fn finished(&self) -> bool {
        self.finished
    }
}

fn hearts(remaining: u32, total: u32) -> String {
    let lost = total.saturating_sub(remaining) as usize;
    format!("{}{}", "♥ ".repeat(remaining as usize), "· ".repeat(lost))
}

impl Presenter for TerminalPresenter {
    fn on_round_start(&mut self, snapshot: &RoundSnapshot) {
        self.finished = false;
        match snapshot {
            RoundSnapshot::Number(round) => {
                println!("Guess a number between 1 and {}.", round.upper_bound);
                println!("Lives: {}", hearts(round.lives_remaining, round.starting_lives));
            }
            RoundSnapshot::Word(round) => {
                println!();
                println!("{}: word {} / {}", round.category, round.word_number, round.word_count);
                println!("  {}", round.masked());
                println!("Lives: {}", hearts(round.lives_remaining, round.starting_lives));
            }
        }
    }

    fn on_guess_outcome(&mut self, outcome: &Outcome, snapshot: &RoundSnapshot) {
        match (outcome, snapshot) {
            (Outcome::Number(outcome), RoundSnapshot::Number(round)) => match outcome {
                GuessOutcome::Invalid(InvalidGuess::NotANumber) => {
                    println!("That is not a number.");
                }
                GuessOutcome::Invalid(InvalidGuess::OutOfRange { min, max }) => {
                    println!("Enter a number between {min} and {max}.");
                }
                GuessOutcome::Hint { direction, .. } => {
                    println!("Wrong! Your guess was {direction}.");
                    println!("Lives: {}", hearts(round.lives_remaining, round.starting_lives));
                }
                GuessOutcome::Won { attempts } => {
                    println!("Correct! You found it in {attempts} guesses.");
                }
                GuessOutcome::Lost { .. } => {}
            },
            (Outcome::Word(report), RoundSnapshot::Word(round)) => {
                match report.outcome {
                    LetterOutcome::Correct { letter, .. } => {
                        println!("Nice! {letter} is in the word.");
                    }
                    LetterOutcome::Incorrect {
                        letter,
                        lives_remaining,
                    } => {
                        println!("No {letter}. {lives_remaining} lives left.");
                    }
                    LetterOutcome::AlreadyGuessed { letter } => {
                        println!("You already tried {letter}.");
                    }
                    LetterOutcome::NotALetter { input } => println!("{input:?} is not a letter."),
                }
                println!("  {}", round.masked());
                if let RoundProgress::WordWon { word, .. } = &report.progress {
                    println!("Well done! The word was {word}.");
                }
            }
            _ => {}
        }
    }

    fn on_session_end(&mut self, result: GameResult, reveal: Option<&str>) {
        self.finished = true;
        match (result, reveal) {
            (GameResult::Won, _) => println!("You win!"),
            (GameResult::Lost, Some(answer)) => println!("Game over! The answer was {answer}."),
            (GameResult::Lost, None) => println!("Game over!"),
        }
        println!("Type :restart to play again or :quit to leave.");
    }

    fn on_categories_available(&mut self, names: &[String]) {
        println!("Categories: {}", names.join(", "));
    }
}
