//! Table model: pivot per-case timings into one wide row per case.

use crate::bench_log::ResultSet;
use crate::list::list_to_string;
use std::collections::BTreeSet;

/// Leading column holding the rendered input list.
pub const INPUT_LIST_COLUMN: &str = "input_list";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Input list in its native textual form, e.g. "[3, 1, 2]".
    pub input_list: String,

    /// One cell per algorithm column; None if the case did not measure it.
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    /// `input_list` followed by algorithm names in ascending order.
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Build the wide table. Columns are the sorted union of every algorithm
/// seen in any case; rows keep log order.
pub fn build_table(cases: &ResultSet) -> TableData {
    let algos: BTreeSet<&str> = cases
        .iter()
        .flat_map(|c| c.timings.keys().map(String::as_str))
        .collect();

    let mut columns = Vec::with_capacity(algos.len() + 1);
    columns.push(INPUT_LIST_COLUMN.to_string());
    columns.extend(algos.iter().map(|a| a.to_string()));
    log::debug!("table columns: {}", columns.join(","));

    let rows = cases
        .iter()
        .map(|case| TableRow {
            input_list: list_to_string(&case.input_list),
            cells: algos.iter().map(|a| case.timings.get(*a).copied()).collect(),
        })
        .collect();

    TableData { columns, rows }
}
