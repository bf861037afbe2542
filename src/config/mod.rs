#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::domain::model::{CardLayout, WordListDefaults};
use crate::utils::error::{BingoError, Result};
use crate::utils::validation::{
    validate_bind_address, validate_non_empty_string, validate_path, validate_range,
    validate_resource_path, Validate,
};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_RESOURCE_PATH: &str = "https://www.buzzwordbingogame.com/parts";
pub const DEFAULT_STATS_FILE: &str = "stats.json";
pub const MAX_DIMENSION: usize = 20;

/// Fully resolved settings: CLI flags over TOML values over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub resource_path: String,
    pub words_dir: Option<String>,
    pub stats_file: String,
    pub layout: CardLayout,
    pub defaults: WordListDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            words_dir: None,
            stats_file: DEFAULT_STATS_FILE.to_string(),
            layout: CardLayout::default(),
            defaults: WordListDefaults::default(),
        }
    }
}

impl Settings {
    pub fn with_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(bind) = &config.server.bind {
            self.bind = bind.clone();
        }
        if let Some(resource_path) = &config.server.resource_path {
            self.resource_path = resource_path.clone();
        }
        if let Some(words_dir) = &config.storage.words_dir {
            self.words_dir = Some(words_dir.clone());
        }
        if let Some(stats_file) = &config.storage.stats_file {
            self.stats_file = stats_file.clone();
        }
        if let Some(rows) = config.card.rows {
            self.layout.rows = rows;
        }
        if let Some(cols) = config.card.cols {
            self.layout.cols = cols;
        }
        if let Some(title) = &config.card.default_title {
            self.defaults.title = title.clone();
        }
        if let Some(shout) = &config.card.default_shout {
            self.defaults.shout = shout.clone();
        }
        self
    }

    pub fn words_dir(&self) -> Result<&str> {
        self.words_dir
            .as_deref()
            .ok_or_else(|| BingoError::MissingConfigError {
                field: "storage.words_dir".to_string(),
            })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_bind_address("server.bind", &self.bind)?;
        validate_resource_path("server.resource_path", &self.resource_path)?;
        if let Some(words_dir) = &self.words_dir {
            validate_path("storage.words_dir", words_dir)?;
        }
        validate_path("storage.stats_file", &self.stats_file)?;
        validate_range("card.rows", self.layout.rows, 1, MAX_DIMENSION)?;
        validate_range("card.cols", self.layout.cols, 1, MAX_DIMENSION)?;
        validate_non_empty_string("card.default_title", &self.defaults.title)?;
        validate_non_empty_string("card.default_shout", &self.defaults.shout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_apart_from_words_dir() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.layout, CardLayout::new(5, 5));
        assert!(matches!(
            settings.words_dir(),
            Err(BingoError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let toml = TomlConfig::from_toml_str(
            r#"
[storage]
words_dir = "bingos"

[card]
rows = 3
default_title = "Standup"
"#,
        )
        .unwrap();

        let settings = Settings::default().with_toml(&toml);
        assert_eq!(settings.words_dir().unwrap(), "bingos");
        assert_eq!(settings.layout, CardLayout::new(3, 5));
        assert_eq!(settings.defaults.title, "Standup");
        assert_eq!(settings.stats_file, DEFAULT_STATS_FILE);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.layout.cols = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.resource_path = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.bind = "nowhere".to_string();
        assert!(settings.validate().is_err());
    }
}
