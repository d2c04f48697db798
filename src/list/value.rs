use crate::list::float::format_float;
use serde::Serialize;
use std::fmt;

/// One element of a parsed input list.
///
/// Example log line: [3, 1.5, [2]]  =>  [Int(3), Float(1.5), List([Int(2)])]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Int(i64),
    Float(f64),
    List(Vec<InputValue>),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Int(i) => write!(f, "{}", i),
            InputValue::Float(x) => f.write_str(&format_float(*x)),
            InputValue::List(items) => write_list(f, items),
        }
    }
}

/// Borrowed input list that displays as "[a, b, c]".
pub struct ListDisplay<'a>(pub &'a [InputValue]);

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[InputValue]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// Render a whole input list in its native textual form.
pub fn list_to_string(items: &[InputValue]) -> String {
    ListDisplay(items).to_string()
}
