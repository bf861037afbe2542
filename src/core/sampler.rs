use crate::domain::model::CardLayout;
use crate::utils::error::{BingoError, Result};
use rand::seq::index;
use rand::Rng;

/// Doubles `words` until it holds at least `min_len` entries.
///
/// A 4-word list grows 4 → 8 → 16 → 32 for a 25-cell card; it is never
/// truncated to exactly `min_len`, so short lists end up with some words
/// copied more often than others.
pub fn enlarge<T: Clone>(words: &[T], min_len: usize) -> Vec<T> {
    let mut enlarged = words.to_vec();
    if enlarged.is_empty() {
        return enlarged;
    }
    while enlarged.len() < min_len {
        enlarged.extend_from_within(..);
    }
    enlarged
}

/// Picks `amount` distinct positions of `pool`, in random order.
///
/// Fails when the pool is smaller than `amount`; callers enlarge it first.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    amount: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if amount > pool.len() {
        return Err(BingoError::InvalidLayout {
            message: format!("cannot draw {} cells from {} words", amount, pool.len()),
        });
    }
    Ok(index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect())
}

/// Fills every cell of a `layout` card from `words`.
pub fn sample_cells<R: Rng + ?Sized>(
    source_name: &str,
    words: &[String],
    layout: CardLayout,
    rng: &mut R,
) -> Result<Vec<String>> {
    if words.is_empty() {
        return Err(BingoError::EmptyWordList {
            source_name: source_name.to_string(),
        });
    }
    let nb_cell = layout.cells();
    if nb_cell == 0 {
        return Err(BingoError::InvalidLayout {
            message: format!("{}x{} card has no cells", layout.rows, layout.cols),
        });
    }

    let enlarged = enlarge(words, nb_cell);
    tracing::debug!(
        source = source_name,
        original = words.len(),
        enlarged = enlarged.len(),
        cells = nb_cell,
        "sampling card cells"
    );
    sample_without_replacement(&enlarged, nb_cell, rng)
}
