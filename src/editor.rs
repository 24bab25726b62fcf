//! Document controller: open, reload, edit, undo, save
//!
//! [`Editor`] composes the parser, encoder, document model and edit
//! history behind the operation contracts a UI calls into. Every
//! operation either fully succeeds or leaves the document and history
//! untouched.

use std::path::{Path, PathBuf};

use crate::csv::{CsvEncoder, CsvParser, Delimiter};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::history::{EditHistory, UndoEntry};
use crate::storage::Storage;

/// What an [`Editor::undo`] call rolled back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undo {
    /// A reload was undone: the pre-reload grid was restored wholesale
    Reload,
    /// A single cell edit was reverted
    CellEdit,
    /// History was empty, nothing changed
    Nothing,
}

/// Controller for one open document
///
/// Mutating operations take `&mut self`, so callers are serialized by
/// the borrow checker; the engine has no internal threading.
///
/// # Examples
///
/// ```
/// use gridedit::{Editor, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// storage.insert("data.csv", b"a,b\n1,2\n".to_vec());
///
/// let mut editor = Editor::new(storage);
/// editor.open("data.csv").unwrap();
/// editor.edit_cell(0, 0, "z").unwrap();
/// assert!(editor.is_modified());
/// editor.undo().unwrap();
/// assert!(!editor.is_modified());
/// ```
pub struct Editor<S: Storage> {
    document: Document,
    history: EditHistory,
    storage: S,
    on_loaded: Option<Box<dyn FnMut(&Path)>>,
}

impl<S: Storage> Editor<S> {
    /// Create an editor over an empty document
    pub fn new(storage: S) -> Self {
        Editor {
            document: Document::new(),
            history: EditHistory::new(),
            storage,
            on_loaded: None,
        }
    }

    /// Create an editor over an existing document
    pub fn with_document(document: Document, storage: S) -> Self {
        Editor {
            document,
            history: EditHistory::new(),
            storage,
            on_loaded: None,
        }
    }

    /// Register the document-loaded hook
    ///
    /// Called with the file identity after every successful open or
    /// reload; the recent-files collaborator attaches here.
    pub fn on_loaded<F: FnMut(&Path) + 'static>(&mut self, hook: F) {
        self.on_loaded = Some(Box::new(hook));
    }

    /// The current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The live grid
    pub fn grid(&self) -> &Grid {
        self.document.grid()
    }

    /// Whether the live grid differs from the last load/save checkpoint
    pub fn is_modified(&self) -> bool {
        self.document.is_modified()
    }

    /// The recorded edit history
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Open a file: sniff the delimiter, parse, and start fresh
    ///
    /// Replaces the live grid and checkpoint atomically, sets the file
    /// identity, and clears all undo history. On any failure the
    /// document and history are left untouched.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        let (grid, delimiter) = self.fetch(&path)?;
        log::info!(
            "loaded {}: {} rows x {} cols",
            path.display(),
            grid.row_count(),
            grid.column_count()
        );
        self.history.clear();
        self.document.replace(grid, path.clone(), delimiter);
        self.notify_loaded(&path);
        Ok(())
    }

    /// Re-read the current file from storage
    ///
    /// The pre-reload grid is pushed onto the snapshot stack strictly
    /// before the replace, so a following [`undo`](Editor::undo) returns
    /// to it. Unlike [`open`](Editor::open), history is kept. Fails with
    /// [`Error::NoFile`] when no file identity is set.
    pub fn reload(&mut self) -> Result<()> {
        let path = self
            .document
            .path()
            .ok_or(Error::NoFile)?
            .to_path_buf();
        let (grid, delimiter) = self.fetch(&path)?;
        log::debug!("reloading {}", path.display());
        self.history.push_snapshot(self.document.grid().clone());
        self.document.replace(grid, path.clone(), delimiter);
        self.notify_loaded(&path);
        Ok(())
    }

    /// Set the value of one cell
    ///
    /// Writing the value a cell already holds is a silent no-op with no
    /// history entry. Otherwise the old value is recorded before the
    /// write so the edit can be undone.
    pub fn edit_cell<V: Into<String>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        let value = value.into();
        let old_value = match self.document.grid().get(row, col) {
            Some(v) => v.to_string(),
            None => {
                return Err(Error::OutOfBounds {
                    row,
                    col,
                    rows: self.document.grid().row_count(),
                    cols: self.document.grid().column_count(),
                })
            }
        };
        if old_value == value {
            return Ok(());
        }
        self.history.push_edit(row, col, old_value);
        self.document.grid_mut().set(row, col, value)
    }

    /// Undo the most recent undoable step
    ///
    /// Snapshots (reloads) are undone in priority over cell edits. Undo
    /// with empty history is a silent no-op, reported as
    /// [`Undo::Nothing`].
    pub fn undo(&mut self) -> Result<Undo> {
        match self.history.pop() {
            Some(UndoEntry::Snapshot(grid)) => {
                log::debug!("undo: restoring pre-reload grid");
                self.document.restore_grid(grid);
                Ok(Undo::Reload)
            }
            Some(UndoEntry::Cell(edit)) => {
                // Entries are recorded against the grid they will be
                // replayed on, so the coordinates are always in bounds
                self.document
                    .grid_mut()
                    .set(edit.row, edit.col, edit.old_value)?;
                Ok(Undo::CellEdit)
            }
            None => Ok(Undo::Nothing),
        }
    }

    /// Save to the document's current file
    ///
    /// The delimiter is chosen from the target extension, not from the
    /// delimiter the document was parsed with. On success the checkpoint
    /// moves to the live grid and the document delimiter is updated.
    /// Fails with [`Error::NoFile`] when no file identity is set.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .document
            .path()
            .ok_or(Error::NoFile)?
            .to_path_buf();
        self.write_to(path)
    }

    /// Save to a new file and adopt it as the document's identity
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.write_to(path.as_ref().to_path_buf())
    }

    /// Read, decode and parse a file without touching document state
    fn fetch(&self, path: &Path) -> Result<(Grid, Delimiter)> {
        let bytes = self.storage.read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::Decode(format!("{}: {}", path.display(), e)))?;
        let delimiter = Delimiter::detect(&text);
        let grid = CsvParser::new(delimiter).parse(&text);
        Ok((grid, delimiter))
    }

    /// Encode the live grid and persist it at `path`
    fn write_to(&mut self, path: PathBuf) -> Result<()> {
        let delimiter = Delimiter::for_path(&path);
        let text = CsvEncoder::new(delimiter).encode(self.document.grid());
        self.storage.write(&path, text.as_bytes())?;
        log::info!("saved {} ({} bytes)", path.display(), text.len());
        self.document.mark_saved(path, delimiter);
        Ok(())
    }

    fn notify_loaded(&mut self, path: &Path) {
        if let Some(hook) = &mut self.on_loaded {
            hook(path);
        }
    }
}
