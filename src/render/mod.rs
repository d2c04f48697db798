//! Output writers for the parsed result set.
//!
//! Every requested output is rendered and staged as a temp file beside its
//! target before any target is replaced, so a failing write leaves no
//! output behind.

pub mod csv;
pub mod json;

use crate::bench_log::ResultSet;
use crate::model;
use anyhow::{Context, bail};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Outcome of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { rows: usize },
    /// No cases were parsed; nothing was written.
    Empty,
}

/// Write the CSV table to `csv_path` (and the JSON dump to `json_path` if
/// given), replacing existing files.
pub fn save_report(
    cases: &ResultSet,
    csv_path: &str,
    json_path: Option<&str>,
) -> anyhow::Result<SaveOutcome> {
    if cases.is_empty() {
        return Ok(SaveOutcome::Empty);
    }

    let table = model::build_table(cases);
    let mut staged = vec![stage(csv_path, &csv::render_csv(&table))?];
    if let Some(json_path) = json_path {
        staged.push(stage(json_path, &json::render_json(cases)?)?);
    }

    for (path, file) in staged {
        file.persist(path)
            .with_context(|| format!("replace output file {}", path))?;
        log::info!("wrote {}", path);
    }

    Ok(SaveOutcome::Written {
        rows: table.rows.len(),
    })
}

fn stage<'a>(path: &'a str, contents: &str) -> anyhow::Result<(&'a str, NamedTempFile)> {
    let target = Path::new(path);
    if target.is_dir() {
        bail!("output path {} is a directory", path);
    }
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut builder = tempfile::Builder::new();
    builder.prefix(".sortbench-").suffix(".tmp");
    // Temp files default to 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut file = builder
        .tempfile_in(dir)
        .with_context(|| format!("create output file {}", path))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write output file {}", path))?;
    Ok((path, file))
}
