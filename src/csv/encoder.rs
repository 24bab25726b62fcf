//! Delimited-text encoding with RFC 4180-style escaping

use crate::csv::Delimiter;
use crate::grid::Grid;

/// Encoder for writing a [`Grid`] as CSV/TSV text
///
/// Escaping here is stricter than the parser's simplified unescaping:
/// fields are quoted whenever they contain the delimiter, a quote, or a
/// newline, and literal quotes are doubled. The asymmetry is intentional
/// so that encoder output always survives a reparse.
///
/// # Examples
///
/// ```
/// use gridedit::{CsvEncoder, Delimiter, Grid};
///
/// let grid = Grid::from_rows(vec![vec!["a,b".to_string(), "c".to_string()]]);
/// let text = CsvEncoder::new(Delimiter::Comma).encode(&grid);
/// assert_eq!(text, "\"a,b\",c\n");
/// ```
pub struct CsvEncoder {
    delimiter: Delimiter,
}

impl CsvEncoder {
    /// Create an encoder for the given delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        CsvEncoder { delimiter }
    }

    /// Encode a grid as document text
    ///
    /// Every row, the last included, is terminated with a single `\n`,
    /// so a grid with N rows yields exactly N lines.
    pub fn encode(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in grid.rows() {
            self.encode_row(row, &mut out);
            out.push('\n');
        }
        out
    }

    /// Encode one row into the output buffer, without the terminator
    fn encode_row(&self, fields: &[String], out: &mut String) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter.as_char());
            }
            self.encode_field(field, out);
        }
    }

    /// Encode a single field, quoting and escaping when required
    fn encode_field(&self, field: &str, out: &mut String) {
        if self.needs_quoting(field) {
            out.push('"');
            for ch in field.chars() {
                if ch == '"' {
                    // Escape quotes by doubling: " -> ""
                    out.push('"');
                }
                out.push(ch);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }

    /// Check whether a field must be wrapped in quotes
    fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter.as_char() || c == '"' || c == '\n')
    }
}
