//! Game configuration types.
//!
//! Hosts configure the engines at startup by providing:
//! - `TierConfig`: Named difficulty tiers for the number game
//! - `WordConfig`: Lives, placeholder and post-win delay for the word game
//! - `GameConfig`: Combines all configuration
//!
//! Configuration is read-only once loaded. It can be built in code or read
//! from TOML; both paths go through `GameConfig::validate`.

use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};

/// Range bound and life count for one number-game round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Largest possible secret. Secrets are drawn from `1..=upper_bound`.
    pub upper_bound: u32,

    /// Lives at round start.
    pub starting_lives: u32,
}

impl DifficultyTier {
    /// Create a new tier.
    ///
    /// # Panics
    ///
    /// Panics if either value is zero.
    #[must_use]
    pub const fn new(upper_bound: u32, starting_lives: u32) -> Self {
        assert!(upper_bound > 0, "Upper bound must be positive");
        assert!(starting_lives > 0, "Starting lives must be positive");

        Self {
            upper_bound,
            starting_lives,
        }
    }
}

/// A tier with the name players select it by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Name used by `InputCommand::SelectTier`.
    pub name: String,

    /// Largest possible secret.
    pub upper_bound: u32,

    /// Lives at round start.
    pub starting_lives: u32,
}

impl TierConfig {
    /// Create a named tier.
    pub fn new(name: impl Into<String>, upper_bound: u32, starting_lives: u32) -> Self {
        Self {
            name: name.into(),
            upper_bound,
            starting_lives,
        }
    }

    /// The unnamed tier record.
    ///
    /// # Panics
    ///
    /// Panics if either value is zero. `GameConfig::validate` rejects such
    /// tiers before any engine sees them.
    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::new(self.upper_bound, self.starting_lives)
    }
}

/// Word game settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConfig {
    /// Lives at the start of every word.
    pub starting_lives: u32,

    /// Symbol shown for unrevealed letters.
    pub placeholder: char,

    /// Pause between winning a word and loading the next one.
    pub advance_delay_ms: u64,
}

impl WordConfig {
    /// Pause between winning a word and loading the next one.
    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// Set starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set the placeholder symbol.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the post-win delay.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check the word settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("word starting lives must be positive"));
        }
        if self.placeholder.is_alphabetic() {
            return Err(ConfigError::invalid("word placeholder must not be a letter"));
        }
        Ok(())
    }
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            starting_lives: 6,
            placeholder: '_',
            advance_delay_ms: 2000,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number-game tiers, in menu order.
    pub tiers: Vec<TierConfig>,

    /// Word-game settings.
    pub word: WordConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierConfig::new("easy", 25, 7),
                TierConfig::new("medium", 100, 10),
                TierConfig::new("hard", 200, 12),
            ],
            word: WordConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with no tiers and default word settings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tiers: Vec::new(),
            word: WordConfig::default(),
        }
    }

    /// Add a tier.
    #[must_use]
    pub fn with_tier(mut self, tier: TierConfig) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Replace the word settings.
    #[must_use]
    pub fn with_word(mut self, word: WordConfig) -> Self {
        self.word = word;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every constraint the engines rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::invalid("at least one tier is required"));
        }

        let mut seen = FxHashSet::default();
        for tier in &self.tiers {
            if tier.upper_bound == 0 {
                return Err(ConfigError::invalid(format!(
                    "tier {:?} has a zero upper bound",
                    tier.name
                )));
            }
            if tier.starting_lives == 0 {
                return Err(ConfigError::invalid(format!(
                    "tier {:?} has zero starting lives",
                    tier.name
                )));
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "tier {:?} is defined twice",
                    tier.name
                )));
            }
        }

        self.word.validate()
    }

    /// Look up a tier by name.
    pub fn tier(&self, name: &str) -> Result<DifficultyTier, GameError> {
        self.tiers
            .iter()
            .find(|t| t.name == name)
            .map(TierConfig::tier)
            .ok_or_else(|| GameError::TierNotFound {
                name: name.to_string(),
            })
    }

    /// Tier names in menu order.
    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|t| t.name.as_str())
    }
}
