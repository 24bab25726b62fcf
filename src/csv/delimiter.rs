//! Field delimiter selection
//!
//! Two supported on-disk formats: CSV (comma) and TSV (tab). Loading
//! sniffs the first line of content; saving goes by the target file
//! extension.

use std::path::Path;

/// Field delimiter for a delimited-text document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    /// Comma-separated values (`.csv`)
    #[default]
    Comma,
    /// Tab-separated values (`.tsv`, `.tab`)
    Tab,
}

impl Delimiter {
    /// The delimiter character
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    /// Sniff the delimiter from document content
    ///
    /// Only the first line is inspected (text up to the first line
    /// break, LF or CR, or the whole text if there is none): a tab
    /// anywhere in it selects [`Delimiter::Tab`], otherwise
    /// [`Delimiter::Comma`]. Empty input yields comma.
    pub fn detect(text: &str) -> Self {
        let first_line = text.split(['\n', '\r']).next().unwrap_or("");
        if first_line.contains('\t') {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }

    /// Pick the delimiter for a target path by extension
    ///
    /// `tsv` and `tab` (any casing) map to tab; everything else,
    /// including a missing extension, maps to comma.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("tsv") | Some("tab") => Delimiter::Tab,
            _ => Delimiter::Comma,
        }
    }
}
