pub mod bingo;
pub mod loader;
pub mod renderer;
pub mod sampler;
pub mod usage;

pub use crate::domain::model::{Card, CardLayout, CardPage, Grid, UsageStats, WordList};
pub use crate::domain::ports::{BingoApi, Storage};
pub use crate::utils::error::Result;
