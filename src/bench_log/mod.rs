//! Parsing for the sorting benchmark driver log.

pub mod parse;
pub mod row;

pub use parse::parse_log_file;
pub use row::ResultSet;
