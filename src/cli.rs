//! Command-line interface for guess-games.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Guess Games - number and word guessing in the terminal
#[derive(Parser, Debug)]
#[command(name = "guess-games")]
#[command(about = "Number and word guessing games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the built-in tiers and word settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the secret-number RNG (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Guess a secret number
    Number {
        /// Difficulty tier
        #[arg(short, long, default_value = "easy")]
        tier: String,
    },

    /// Guess the words of a category, letter by letter
    Word {
        /// JSON file mapping categories to word lists
        #[arg(short, long)]
        dataset: PathBuf,

        /// Category to play (prompted if omitted)
        #[arg(long)]
        category: Option<String>,
    },

    /// List the configured difficulty tiers
    Tiers,
}
