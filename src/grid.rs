//! Rectangular grid of string cells
//!
//! A [`Grid`] is the in-memory shape of a delimited-text document: an
//! ordered list of rows, every row holding the same number of string
//! cells. Comparing two grids with `==` compares cell values, which is
//! what drives the document's modified flag.

use crate::error::{Error, Result};

/// Rectangular grid of string cells
///
/// Rows and columns are indexed from 0. The rectangular invariant is
/// maintained by construction: [`Grid::from_rows`] pads short rows on the
/// right with empty strings.
///
/// # Examples
///
/// ```
/// use gridedit::Grid;
///
/// let grid = Grid::from_rows(vec![
///     vec!["a".to_string(), "b".to_string()],
///     vec!["c".to_string()],
/// ]);
/// assert_eq!(grid.column_count(), 2);
/// assert_eq!(grid.get(1, 1), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid (zero rows, zero columns)
    pub fn new() -> Self {
        Grid { rows: Vec::new() }
    }

    /// Build a grid from rows, padding short rows to rectangular shape
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            while row.len() < width {
                row.push(String::new());
            }
        }
        Grid { rows }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (identical for every row)
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value at (row, col), or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }

    /// Set cell value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: String) -> Result<()> {
        let (rows, cols) = (self.row_count(), self.column_count());
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    /// Iterate over rows as string slices
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Spreadsheet-style column label (0 -> A, 25 -> Z, 26 -> AA)
///
/// Base-26 letters with no zero digit, used for display headers only.
///
/// # Examples
///
/// ```
/// use gridedit::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(701), "ZZ");
/// ```
pub fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    label
}
