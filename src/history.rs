//! Two-tier undo history
//!
//! Single-cell edits and whole-grid snapshots live on independent
//! stacks. Snapshots record the grid as it was before a reload-style
//! bulk replace, and undo pops them in priority over cell edits, so
//! undoing after a reload first returns to the pre-reload state.

use crate::grid::Grid;

/// Inverse record for a single cell edit
///
/// Pushed strictly before the new value is written, so popping it
/// restores the exact pre-edit state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellEdit {
    /// Row index of the edited cell
    pub row: usize,
    /// Column index of the edited cell
    pub col: usize,
    /// Cell value before the edit
    pub old_value: String,
}

/// One step popped off the history by an undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEntry {
    /// Whole-grid snapshot taken before a bulk replace
    Snapshot(Grid),
    /// Inverse record of a single cell edit
    Cell(CellEdit),
}

/// LIFO edit history with separate cell-edit and snapshot stacks
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    cell_edits: Vec<CellEdit>,
    snapshots: Vec<Grid>,
}

impl EditHistory {
    /// Create an empty history
    pub fn new() -> Self {
        EditHistory::default()
    }

    /// Record a cell's pre-edit value
    pub fn push_edit(&mut self, row: usize, col: usize, old_value: String) {
        self.cell_edits.push(CellEdit {
            row,
            col,
            old_value,
        });
    }

    /// Record the whole grid before a bulk replace
    pub fn push_snapshot(&mut self, grid: Grid) {
        self.snapshots.push(grid);
    }

    /// Pop the most recent undoable step
    ///
    /// The snapshot stack takes priority: when both stacks hold entries,
    /// the snapshot is popped first.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        if let Some(grid) = self.snapshots.pop() {
            return Some(UndoEntry::Snapshot(grid));
        }
        self.cell_edits.pop().map(UndoEntry::Cell)
    }

    /// Drop all recorded history
    pub fn clear(&mut self) {
        self.cell_edits.clear();
        self.snapshots.clear();
    }

    /// Check if there is nothing to undo
    pub fn is_empty(&self) -> bool {
        self.cell_edits.is_empty() && self.snapshots.is_empty()
    }

    /// Number of recorded cell edits
    pub fn edit_count(&self) -> usize {
        self.cell_edits.len()
    }

    /// Number of recorded snapshots
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}
