//! CSV/TSV parsing, encoding and delimiter selection

mod delimiter;
mod encoder;
mod parser;

pub use delimiter::Delimiter;
pub use encoder::CsvEncoder;
pub use parser::CsvParser;
