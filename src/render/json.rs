use crate::bench_log::ResultSet;

/// Render the parsed cases as pretty JSON, e.g.
/// [{ "input_list": [3, 1, 2], "timings": { "bubble": 0.0001 } }]
pub fn render_json(cases: &ResultSet) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(cases)?)
}
