use crate::core::Storage;
use crate::domain::model::{WordList, WordListDefaults, WordListRecord};
use crate::utils::error::{BingoError, Result};
use crate::utils::validation::is_valid_identifier;
use std::path::Path;

impl WordListDefaults {
    /// Fills the optional fields of `record`. `words` has no default.
    pub fn apply(&self, source_name: &str, record: WordListRecord) -> Result<WordList> {
        let words = match record.words {
            Some(words) if !words.is_empty() => words,
            _ => {
                return Err(BingoError::EmptyWordList {
                    source_name: source_name.to_string(),
                })
            }
        };

        Ok(WordList {
            title: record.title.unwrap_or_else(|| self.title.clone()),
            shout: record.shout.unwrap_or_else(|| self.shout.clone()),
            words,
        })
    }

    /// Parses one JSON word-list document.
    pub fn parse(&self, source_name: &str, bytes: &[u8]) -> Result<WordList> {
        let record: WordListRecord = serde_json::from_slice(bytes)?;
        self.apply(source_name, record)
    }

    /// Loads a word list from any path, outside the words directory.
    pub fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<WordList> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BingoError::NotFound {
                identifier: path.display().to_string(),
            },
            _ => BingoError::IoError(e),
        })?;
        self.parse(&path.display().to_string(), &bytes)
    }
}

/// Resolves card identifiers to word lists stored as `<identifier>.json`.
pub struct WordListLoader<S: Storage> {
    storage: S,
    defaults: WordListDefaults,
}

impl<S: Storage> WordListLoader<S> {
    pub fn new(storage: S, defaults: WordListDefaults) -> Self {
        Self { storage, defaults }
    }

    pub fn defaults(&self) -> &WordListDefaults {
        &self.defaults
    }

    pub async fn load(&self, identifier: &str) -> Result<WordList> {
        let not_found = || BingoError::NotFound {
            identifier: identifier.to_string(),
        };
        if !is_valid_identifier(identifier) {
            tracing::debug!(identifier, "rejecting identifier outside the words directory");
            return Err(not_found());
        }

        let path = format!("{}.json", identifier);
        let bytes = self.storage.read_file(&path).await?.ok_or_else(not_found)?;
        tracing::debug!(identifier, file = %self.storage.describe(&path), "loaded word list");
        self.defaults.parse(identifier, &bytes)
    }
}
