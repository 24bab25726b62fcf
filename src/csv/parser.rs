//! Delimited-text parsing with a simplified quote-toggle rule

use crate::csv::Delimiter;
use crate::grid::Grid;

/// Parser for CSV/TSV document text
///
/// Single-pass character state machine with one boolean quoting state.
/// A `"` toggles quoting and is never emitted into the field, so a
/// doubled `""` toggles twice and the pair is dropped. This is
/// deliberately NOT full RFC 4180 unescaping: the toggle rule is the
/// compatibility contract, and [`CsvEncoder`](crate::CsvEncoder) output
/// round-trips through it exactly.
///
/// # Examples
///
/// ```
/// use gridedit::{CsvParser, Delimiter};
///
/// let parser = CsvParser::new(Delimiter::Comma);
/// let grid = parser.parse("a,\"b,c\",d\n1,2,3\n");
/// assert_eq!(grid.get(0, 1), Some("b,c"));
/// assert_eq!(grid.row_count(), 2);
/// ```
pub struct CsvParser {
    delimiter: Delimiter,
}

impl CsvParser {
    /// Create a parser for the given delimiter
    pub fn new(delimiter: Delimiter) -> Self {
        CsvParser { delimiter }
    }

    /// Parse document text into a rectangular [`Grid`]
    ///
    /// Rows shorter than the widest row are padded on the right with
    /// empty fields. Empty input yields an empty grid. Carriage returns
    /// outside quotes are discarded, so CRLF input parses like LF input.
    pub fn parse(&self, text: &str) -> Grid {
        let delimiter = self.delimiter.as_char();
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut current_row: Vec<String> = Vec::new();
        let mut current_field = String::new();
        let mut in_quotes = false;

        for ch in text.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
            } else if ch == delimiter && !in_quotes {
                current_row.push(std::mem::take(&mut current_field));
            } else if ch == '\n' && !in_quotes {
                // Every newline ends a row, so a blank line is a row
                // with one empty field and an empty row survives a
                // reparse
                current_row.push(std::mem::take(&mut current_field));
                rows.push(std::mem::take(&mut current_row));
            } else if ch == '\r' && !in_quotes {
                // Skip carriage returns
            } else {
                current_field.push(ch);
            }
        }

        // Flush the final field and row when input does not end in a
        // newline
        if !current_field.is_empty() || !current_row.is_empty() {
            current_row.push(current_field);
            rows.push(current_row);
        }

        Grid::from_rows(rows)
    }
}
