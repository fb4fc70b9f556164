use serde::{Deserialize, Serialize};

use super::RowKey;

/// Rectangular selection over row and column indices (inclusive, any corner order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl Selection {
    /// Create a cell range selection
    pub fn cell_range(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Get normalized bounds (min_row, min_col, max_row, max_col)
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.start_row.min(self.end_row),
            self.start_col.min(self.end_col),
            self.start_row.max(self.end_row),
            self.start_col.max(self.end_col),
        )
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        let (min_row, _, max_row, _) = self.bounds();
        (max_row - min_row) as usize + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> usize {
        let (_, min_col, _, max_col) = self.bounds();
        (max_col - min_col) as usize + 1
    }

    /// Top-left corner as (row, col)
    pub fn origin(&self) -> (u32, u32) {
        let (min_row, min_col, _, _) = self.bounds();
        (min_row, min_col)
    }
}

/// The focused cell reported by the focus model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusedCell {
    pub row_key: RowKey,
    pub column_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_is_corner_order_independent() {
        let sel = Selection::cell_range(5, 3, 2, 1);
        assert_eq!(sel.bounds(), (2, 1, 5, 3));
        assert_eq!(sel.row_count(), 4);
        assert_eq!(sel.col_count(), 3);
        assert_eq!(sel.origin(), (2, 1));
    }

    #[test]
    fn test_single_cell_extent() {
        let sel = Selection::cell_range(0, 0, 0, 0);
        assert_eq!((sel.row_count(), sel.col_count()), (1, 1));
    }
}
