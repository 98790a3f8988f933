//! Input source contract.

use serde::{Deserialize, Serialize};

/// One discrete user action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputCommand {
    /// Start a number round at the named tier.
    SelectTier(String),
    /// Start a word session over the named category.
    SelectCategory(String),
    /// Submit the text typed into the number field.
    SubmitGuess(String),
    /// Pick a letter in the word game.
    GuessLetter(char),
    /// Replay the last selection from scratch.
    Restart,
}

impl InputCommand {
    /// Parse a line of text typed at a prompt.
    ///
    /// `:restart`, `:tier NAME` and `:category NAME` are commands; a lone
    /// alphabetic character is a letter; anything else is a number guess.
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(':') {
            let (word, arg) = rest.split_once(' ').unwrap_or((rest, ""));
            let arg = arg.trim();
            match word {
                "restart" => return Self::Restart,
                "tier" if !arg.is_empty() => return Self::SelectTier(arg.to_string()),
                "category" if !arg.is_empty() => return Self::SelectCategory(arg.to_string()),
                _ => {}
            }
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_alphabetic() => Self::GuessLetter(ch),
            _ => Self::SubmitGuess(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(InputCommand::parse_line(":restart"), InputCommand::Restart);
        assert_eq!(
            InputCommand::parse_line(":tier hard"),
            InputCommand::SelectTier("hard".to_string())
        );
        assert_eq!(
            InputCommand::parse_line(" :category  Fruit and Veg \n"),
            InputCommand::SelectCategory("Fruit and Veg".to_string())
        );
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(InputCommand::parse_line("a"), InputCommand::GuessLetter('a'));
        assert_eq!(InputCommand::parse_line(" Q \n"), InputCommand::GuessLetter('Q'));
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(
            InputCommand::parse_line("42\n"),
            InputCommand::SubmitGuess("42".to_string())
        );
        assert_eq!(
            InputCommand::parse_line("7"),
            InputCommand::SubmitGuess("7".to_string())
        );
        assert_eq!(
            InputCommand::parse_line("abc"),
            InputCommand::SubmitGuess("abc".to_string())
        );
        // Incomplete commands fall through as text
        assert_eq!(
            InputCommand::parse_line(":tier"),
            InputCommand::SubmitGuess(":tier".to_string())
        );
    }
}
