//! Category word lists.
//!
//! The dataset is a single JSON object mapping category names to arrays
//! of words:
//!
//! ```json
//! { "Animals": ["cat", "dog"], "Fruit": ["apple"] }
//! ```
//!
//! Category order follows the document. Words may be any case; rounds
//! uppercase them. Loaded once, read-only afterwards.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::DatasetError;

/// One named word list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Name shown to the player.
    pub name: String,
    /// Words in play order.
    pub words: Vec<String>,
}

/// All categories, in menu order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl Dataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, replacing any existing one with the same name.
    #[must_use]
    pub fn with_category<W, S>(mut self, name: impl Into<String>, words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name.into(), words.into_iter().map(Into::into).collect());
        self
    }

    fn insert(&mut self, name: String, words: Vec<String>) {
        match self.index.get(&name) {
            Some(&i) => self.categories[i].words = words,
            None => {
                self.index.insert(name.clone(), self.categories.len());
                self.categories.push(Category { name, words });
            }
        }
    }

    /// Parse a JSON document.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| DatasetError::Parse { source })?;

        let Value::Object(map) = value else {
            return Err(DatasetError::NotAnObject);
        };

        let mut dataset = Self::new();
        for (name, words) in map {
            let words: Vec<String> = serde_json::from_value(words).map_err(|source| {
                DatasetError::BadCategory {
                    category: name.clone(),
                    source,
                }
            })?;
            dataset.insert(name, words);
        }

        debug!(categories = dataset.len(), "Dataset parsed");
        Ok(dataset)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Words for a category, if it exists.
    #[must_use]
    pub fn words(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&i| self.categories[i].words.as_slice())
    }

    /// Category names in menu order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// All categories in menu order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
