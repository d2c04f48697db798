use crate::list::format_float;
use crate::model::TableData;

/// Render the table: header row, then one row per case. Missing timings
/// are empty cells and every row ends in CRLF.
pub fn render_csv(table: &TableData) -> String {
    let mut out = String::new();
    push_record(&mut out, table.columns.iter().map(String::as_str));

    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|c| c.map(format_float).unwrap_or_default())
            .collect();
        push_record(
            &mut out,
            std::iter::once(row.input_list.as_str()).chain(cells.iter().map(String::as_str)),
        );
    }
    out
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

/// Quote only when the field holds a comma, quote, or line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
