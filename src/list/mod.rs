//! Input-list literals: the `[3, 1, 2]` line that opens every case.

pub mod float;
pub mod parse;
pub mod value;

pub use float::format_float;
pub use parse::parse_list_literal;
pub use value::{InputValue, list_to_string};
