//! Delimited-text (CSV/TSV) document engine
//!
//! The editable core of a spreadsheet-style CSV/TSV editor, with the UI
//! left to the caller: quote-aware parsing into a rectangular grid,
//! round-trip-safe serialization back to text, checkpoint-based
//! modification tracking, and a two-tier undo history covering both
//! single-cell edits and whole-document reloads.
//!
//! # Examples
//!
//! ```no_run
//! use gridedit::{Editor, FsStorage};
//!
//! let mut editor = Editor::new(FsStorage);
//! editor.open("data.csv").unwrap();
//! editor.edit_cell(0, 0, "hello").unwrap();
//! assert!(editor.is_modified());
//! editor.save().unwrap();
//! assert!(!editor.is_modified());
//! ```
//!
//! Parsing and encoding are usable on their own:
//!
//! ```
//! use gridedit::{CsvEncoder, CsvParser, Delimiter};
//!
//! let grid = CsvParser::new(Delimiter::Comma).parse("a,\"b,c\"\n");
//! assert_eq!(grid.get(0, 1), Some("b,c"));
//! assert_eq!(CsvEncoder::new(Delimiter::Comma).encode(&grid), "a,\"b,c\"\n");
//! ```

pub mod csv;
pub mod document;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod storage;

pub use csv::{CsvEncoder, CsvParser, Delimiter};
pub use document::Document;
pub use editor::{Editor, Undo};
pub use error::{Error, Result};
pub use grid::{column_label, Grid};
pub use history::{CellEdit, EditHistory, UndoEntry};
pub use storage::{FsStorage, MemoryStorage, Storage};
