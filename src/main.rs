//! Guess Games - terminal front end.

#![warn(missing_docs)]

mod cli;
mod terminal;

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use guess_games::{ActiveGame, Arcade, Dataset, GameConfig, GameRng, InputCommand};
use terminal::TerminalPresenter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type TerminalArcade = Arcade<TerminalPresenter, GameRng>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "Random source ready");

    match cli.command {
        Command::Tiers => {
            for tier in &config.tiers {
                println!(
                    "{:<10} 1..={:<6} {} lives",
                    tier.name, tier.upper_bound, tier.starting_lives
                );
            }
            Ok(())
        }
        Command::Number { tier } => {
            let mut arcade = Arcade::new(config, rng, TerminalPresenter::default())?;
            arcade.handle(InputCommand::SelectTier(tier))?;
            run(&mut arcade)
        }
        Command::Word { dataset, category } => {
            let mut arcade = Arcade::new(config, rng, TerminalPresenter::default())?;
            arcade
                .load_dataset(Dataset::load(&dataset))
                .with_context(|| format!("loading dataset from {}", dataset.display()))?;

            let category = match category {
                Some(category) => category,
                None => prompt("Category: ")?,
            };
            arcade.handle(InputCommand::SelectCategory(category))?;
            run(&mut arcade)
        }
    }
}

/// Read one trimmed line from stdin after printing `label`.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Feed stdin lines to the arcade until `:quit` or end of input.
fn run(arcade: &mut TerminalArcade) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == ":quit" {
            break;
        }

        let command = match (InputCommand::parse_line(&line), arcade.active()) {
            // A lone letter is still a (bad) number guess in the number game
            (InputCommand::GuessLetter(ch), ActiveGame::Number(_)) => {
                InputCommand::SubmitGuess(ch.to_string())
            }
            (InputCommand::SubmitGuess(_), ActiveGame::Word(_))
                if !arcade.presenter().finished() =>
            {
                println!("Type a single letter.");
                continue;
            }
            (command, _) => command,
        };

        if let Err(err) = arcade.handle(command) {
            println!("{err}");
        }

        if let Some(ticket) = arcade.pending_advance() {
            debug!(?ticket, "Waiting before next word");
            thread::sleep(ticket.delay());
            arcade.complete_advance(ticket);
        }
    }

    Ok(())
}
