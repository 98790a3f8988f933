//! Error types.
//!
//! Bad guesses are not errors: they come back as outcomes and the round
//! carries on. These types cover configuration and usage failures that
//! stop a round or session from being created at all.

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Failure to create or drive a game.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// No tier with this name is configured.
    #[display("difficulty tier not found: {name}")]
    TierNotFound {
        /// The requested tier name.
        name: String,
    },

    /// The dataset has no category with this name.
    #[display("category not found: {name}")]
    CategoryNotFound {
        /// The requested category name.
        name: String,
    },

    /// The word game was used before a dataset loaded successfully.
    #[display("word dataset is not available")]
    DatasetUnavailable,

    /// Loading the word dataset failed.
    #[display("dataset error: {_0}")]
    Dataset(DatasetError),

    /// The configuration could not be loaded.
    #[display("configuration error: {_0}")]
    Config(ConfigError),
}

impl From<DatasetError> for GameError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Failure to load the category word list.
#[derive(Debug, Display, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[display("could not read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[display("malformed dataset: {source}")]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The top-level value is not an object of categories.
    #[display("dataset must be a JSON object mapping categories to word lists")]
    NotAnObject,

    /// A category's value is not an array of strings.
    #[display("category {category:?} must be an array of strings: {source}")]
    BadCategory {
        /// Offending category.
        category: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Failure to load or validate configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[display("could not read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config is not valid TOML for this schema.
    #[display("malformed config: {source}")]
    Parse {
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The config parsed but violates a constraint.
    #[display("invalid config: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}
