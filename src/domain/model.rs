use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TITLE: &str = "bingo";
pub const DEFAULT_SHOUT: &str = "ROUFLAQUETTES !";
pub const NB_ROW: usize = 5;
pub const NB_COL: usize = 5;

/// A word list as stored on disk. Every field is optional here; defaults are
/// applied by [`WordListDefaults::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListRecord {
    pub title: Option<String>,
    pub shout: Option<String>,
    pub words: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListDefaults {
    pub title: String,
    pub shout: String,
}

impl Default for WordListDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            shout: DEFAULT_SHOUT.to_string(),
        }
    }
}

/// A resolved word list. `words` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub title: String,
    pub shout: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    pub rows: usize,
    pub cols: usize,
}

impl CardLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::new(NB_ROW, NB_COL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub shout: String,
    pub cells: Vec<String>,
}

/// Rows of cells, row-major.
pub type Grid = Vec<Vec<String>>;

/// What the card route needs to produce a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPage {
    pub identifier: String,
    pub title: String,
    pub shout: String,
    pub grid: Grid,
    pub visits: u64,
}

/// Visit counts per card identifier, serialized as a flat JSON object.
pub type UsageStats = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub identifier: String,
    pub hits: u64,
}
