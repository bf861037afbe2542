pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::Settings;

pub use adapters::http::{router, AppState};
pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use crate::core::{bingo::BingoService, loader::WordListLoader, usage::UsageStore};
pub use domain::model::{CardLayout, WordList, WordListDefaults};
pub use utils::error::{BingoError, Result};
