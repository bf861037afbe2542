use crate::core::loader::WordListLoader;
use crate::core::renderer::render;
use crate::core::sampler::sample_cells;
use crate::core::usage::UsageStore;
use crate::core::{BingoApi, Storage};
use crate::domain::model::{Card, CardLayout, CardPage, Grid, LeaderboardEntry, WordList};
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;

/// Draws one card from `list`.
pub fn generate_card<R: Rng + ?Sized>(
    source_name: &str,
    list: &WordList,
    layout: CardLayout,
    rng: &mut R,
) -> Result<Card> {
    let cells = sample_cells(source_name, &list.words, layout, rng)?;
    Ok(Card {
        title: list.title.clone(),
        shout: list.shout.clone(),
        cells,
    })
}

impl Card {
    pub fn grid(&self, layout: CardLayout) -> Result<Grid> {
        render(&self.cells, layout.rows, layout.cols)
    }
}

pub struct BingoService<W: Storage, U: Storage> {
    loader: WordListLoader<W>,
    usage: UsageStore<U>,
    layout: CardLayout,
}

impl<W: Storage, U: Storage> BingoService<W, U> {
    pub fn new(loader: WordListLoader<W>, usage: UsageStore<U>, layout: CardLayout) -> Self {
        Self {
            loader,
            usage,
            layout,
        }
    }

    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    pub fn usage(&self) -> &UsageStore<U> {
        &self.usage
    }
}

#[async_trait]
impl<W: Storage, U: Storage> BingoApi for BingoService<W, U> {
    async fn card(&self, identifier: &str) -> Result<CardPage> {
        let list = self.loader.load(identifier).await?;
        let visits = self.usage.increment(identifier).await?;

        let card = generate_card(identifier, &list, self.layout, &mut rand::thread_rng())?;
        let grid = card.grid(self.layout)?;

        Ok(CardPage {
            identifier: identifier.to_string(),
            title: card.title,
            shout: card.shout,
            grid,
            visits,
        })
    }

    async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.usage.leaderboard().await
    }
}
