use crate::list::InputValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Algorithm name -> CPU time in seconds, for one case.
pub type Timings = BTreeMap<String, f64>;

/// A single test case from the benchmark log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    pub input_list: Vec<InputValue>,
    pub timings: Timings,
}

/// Cases in the order they appear in the log.
pub type ResultSet = Vec<CaseRecord>;
