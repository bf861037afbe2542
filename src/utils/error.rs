use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("No bingo found for identifier '{identifier}'")]
    NotFound { identifier: String },

    #[error("Word list '{source_name}' contains no words")]
    EmptyWordList { source_name: String },

    #[error("Invalid card layout: {message}")]
    InvalidLayout { message: String },

    #[error("Failed to write usage stats to {path}: {source}")]
    StatsWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, BingoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BingoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BingoError::NotFound { .. } => ErrorCategory::Request,
            BingoError::EmptyWordList { .. }
            | BingoError::InvalidLayout { .. }
            | BingoError::SerializationError(_) => ErrorCategory::Data,
            BingoError::StatsWriteError { .. } | BingoError::IoError(_) => ErrorCategory::Storage,
            BingoError::ConfigValidationError { .. }
            | BingoError::InvalidConfigValueError { .. }
            | BingoError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BingoError::NotFound { identifier } => format!("Unknown bingo: {}", identifier),
            BingoError::EmptyWordList { source_name } => {
                format!("The bingo '{}' has no words to put on a card", source_name)
            }
            BingoError::InvalidLayout { message } => format!("Bad card layout: {}", message),
            BingoError::StatsWriteError { path, .. } => {
                format!("Could not record card usage in {}", path)
            }
            BingoError::IoError(e) => format!("File access failed: {}", e),
            BingoError::SerializationError(e) => format!("Word list is not valid JSON: {}", e),
            BingoError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            BingoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            BingoError::MissingConfigError { field } => format!("Missing setting: {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BingoError::NotFound { .. } => "Check the identifier against the files in the words directory",
            BingoError::EmptyWordList { .. } => "Add at least one entry to the \"words\" array",
            BingoError::InvalidLayout { .. } => "Use at least one row and one column",
            BingoError::StatsWriteError { .. } => {
                "Make sure the stats file location exists and is writable"
            }
            BingoError::IoError(_) => "Check file permissions and paths",
            BingoError::SerializationError(_) => "Fix the JSON syntax of the word list",
            BingoError::ConfigValidationError { .. }
            | BingoError::InvalidConfigValueError { .. }
            | BingoError::MissingConfigError { .. } => "Review the command line flags and config file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_low_severity() {
        let err = BingoError::NotFound {
            identifier: "meetings".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("meetings"));
    }

    #[test]
    fn test_stats_write_is_critical() {
        let err = BingoError::StatsWriteError {
            path: "stats.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("stats.json"));
    }
}
