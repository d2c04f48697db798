use crate::list::parse_list_literal;
use crate::bench_log::row::{CaseRecord, ResultSet, Timings};
use crate::model::INPUT_LIST_COLUMN;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Marker line that opens every case block.
pub const CASE_DELIMITER: &str = "Running algorithms on list:";

/// Parse a benchmark log file into the ordered set of cases.
pub fn parse_log_file(path: &str) -> anyhow::Result<ResultSet> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;
    parse_log_text(&text).with_context(|| format!("log parse error in {}", path))
}

/// Parse benchmark log text.
///
/// Expected block shape (anything before the first delimiter is ignored):
///
/// Running algorithms on list:
/// [3, 1, 2]
/// CPU time: 0.0001
/// Algotype: bubble
/// CPU time: 5e-05
/// Algotype: quick
pub fn parse_log_text(text: &str) -> anyhow::Result<ResultSet> {
    // Whole token after the label; malformed numbers must fail to parse.
    let cpu_re = Regex::new(r"CPU time:\s*(\S+)")?;
    // Algorithm name: rest of line.
    let algo_re = Regex::new(r"Algotype:(.*)$")?;

    let mut out = ResultSet::new();
    for (idx, chunk) in text.split(CASE_DELIMITER).skip(1).enumerate() {
        let case_no = idx + 1;
        let record = parse_case(chunk, &cpu_re, &algo_re)
            .with_context(|| format!("case {}", case_no))?;
        out.push(record);
    }

    log::info!("parsed {} case(s)", out.len());
    Ok(out)
}

fn parse_case(chunk: &str, cpu_re: &Regex, algo_re: &Regex) -> anyhow::Result<CaseRecord> {
    let lines: Vec<&str> = chunk.trim().lines().collect();

    let first = lines.first().copied().unwrap_or("");
    let input_list = parse_list_literal(first.trim())
        .with_context(|| format!("line 1: bad input list {:?}", first))?;

    let rest = lines.get(1..).unwrap_or_default();
    if rest.len() % 2 != 0 {
        bail!(
            "line {}: \"CPU time:\" without a following \"Algotype:\" line",
            lines.len()
        );
    }

    let mut timings = Timings::new();
    for (pair_idx, pair) in rest.chunks_exact(2).enumerate() {
        let time_lno = 2 + pair_idx * 2;
        let (time_line, algo_line) = (pair[0], pair[1]);

        let time_str = cpu_re
            .captures(time_line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        let Some(time_str) = time_str else {
            bail!(
                "line {}: missing \"CPU time:\" in {:?}",
                time_lno,
                time_line
            );
        };
        let cpu_time: f64 = time_str
            .parse()
            .with_context(|| format!("line {}: bad CPU time {}", time_lno, time_str))?;
        if !cpu_time.is_finite() {
            bail!("line {}: CPU time {} is not finite", time_lno, time_str);
        }

        let algo = algo_re
            .captures(algo_line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim());
        let algo = match algo {
            Some(a) if !a.is_empty() => a,
            _ => bail!(
                "line {}: missing \"Algotype:\" in {:?}",
                time_lno + 1,
                algo_line
            ),
        };
        if algo == INPUT_LIST_COLUMN {
            bail!(
                "line {}: algorithm name {:?} collides with the input column",
                time_lno + 1,
                algo
            );
        }

        if let Some(prev) = timings.insert(algo.to_string(), cpu_time) {
            log::warn!(
                "algorithm {:?} measured twice in one case; {} replaced by {}",
                algo,
                prev,
                cpu_time
            );
        }
    }

    Ok(CaseRecord {
        input_list,
        timings,
    })
}
