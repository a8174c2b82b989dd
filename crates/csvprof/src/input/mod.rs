//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig, parse_delimiter};
pub use source::{DataTable, Record, SourceMetadata};
