//! Document model: live grid, saved checkpoint, file identity

use std::path::{Path, PathBuf};

use crate::csv::Delimiter;
use crate::grid::Grid;

/// An open delimited-text document
///
/// Owns the live grid plus a checkpoint copy of the grid as it was at
/// the last load or save. The modified flag is never stored: it is
/// derived by comparing the two grids, so it cannot drift.
#[derive(Debug, Clone, Default)]
pub struct Document {
    grid: Grid,
    checkpoint: Grid,
    path: Option<PathBuf>,
    delimiter: Delimiter,
}

impl Document {
    /// Create an empty, unsaved document
    pub fn new() -> Self {
        Document::default()
    }

    /// Create a document around an existing grid
    ///
    /// The checkpoint starts as a copy of `grid`, so the document is
    /// initially unmodified.
    pub fn with_grid(grid: Grid, delimiter: Delimiter) -> Self {
        Document {
            checkpoint: grid.clone(),
            grid,
            path: None,
            delimiter,
        }
    }

    /// The live grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the live grid
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The grid as of the last load or save
    pub fn checkpoint(&self) -> &Grid {
        &self.checkpoint
    }

    /// File identity, if the document has been loaded or saved
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current delimiter (sniffed on load, extension-derived on save)
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Whether the live grid differs from the checkpoint
    pub fn is_modified(&self) -> bool {
        self.grid != self.checkpoint
    }

    /// Replace grid, checkpoint, identity and delimiter in one step
    ///
    /// The load path: checkpoint becomes an independent copy of the new
    /// grid, so the document reads as unmodified.
    pub(crate) fn replace(&mut self, grid: Grid, path: PathBuf, delimiter: Delimiter) {
        self.checkpoint = grid.clone();
        self.grid = grid;
        self.path = Some(path);
        self.delimiter = delimiter;
    }

    /// Swap in a grid without touching the checkpoint
    ///
    /// The undo-of-reload path: the restored grid generally differs from
    /// the checkpoint, so the document reads as modified again.
    pub(crate) fn restore_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Re-checkpoint at the live grid after a successful save
    pub(crate) fn mark_saved(&mut self, path: PathBuf, delimiter: Delimiter) {
        self.checkpoint = self.grid.clone();
        self.path = Some(path);
        self.delimiter = delimiter;
    }
}
