use crate::domain::model::Grid;
use crate::utils::error::{BingoError, Result};

/// Splits `cells` into `rows` rows of `cols` cells, keeping their order.
pub fn render(cells: &[String], rows: usize, cols: usize) -> Result<Grid> {
    if rows == 0 || cols == 0 {
        return Err(BingoError::InvalidLayout {
            message: format!("{}x{} grid has no cells", rows, cols),
        });
    }
    if cells.len() != rows * cols {
        return Err(BingoError::InvalidLayout {
            message: format!(
                "expected {} cells for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                cells.len()
            ),
        });
    }

    Ok(cells.chunks(cols).map(|row| row.to_vec()).collect())
}
