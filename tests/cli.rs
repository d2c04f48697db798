use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sortbench-csv"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn single_case_uses_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("prolog_output.txt"),
        "Running algorithms on list:\n[3, 1, 2]\nCPU time: 0.0001\nAlgotype: bubble\nCPU time: 0.00005\nAlgotype: quick\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(
        stdout(&out),
        "Results have been saved to sorting_results.csv\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("sorting_results.csv")).unwrap(),
        "input_list,bubble,quick\r\n\"[3, 1, 2]\",0.0001,5e-05\r\n"
    );
}

#[test]
fn log_without_cases_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prolog_output.txt"), "nothing ran today\n").unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(stdout(&out), "No results to save.\n");
    assert!(!dir.path().join("sorting_results.csv").exists());
}

#[test]
fn malformed_case_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("prolog_output.txt"),
        "Running algorithms on list:\n[3, 1, 2]\nCPU time: 0.0001\nbubble\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Algotype:"));
    assert!(!dir.path().join("sorting_results.csv").exists());
}

#[test]
fn sparse_cases_leave_empty_cells() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bench.log"),
        "preamble\n\
         Running algorithms on list:\n[1, 2]\nCPU time: 0.1\nAlgotype: bubble\nCPU time: 0.2\nAlgotype: quick\n\
         Running algorithms on list:\n[2, 1]\nCPU time: 0.3\nAlgotype: quick\nCPU time: 0.4\nAlgotype: merge\n",
    )
    .unwrap();

    let out = run_in(
        dir.path(),
        &["--input", "bench.log", "-o", "table.csv", "--json", "cases.json"],
    );
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(stdout(&out), "Results have been saved to table.csv\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("table.csv")).unwrap(),
        "input_list,bubble,merge,quick\r\n\"[1, 2]\",0.1,,0.2\r\n\"[2, 1]\",,0.4,0.3\r\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("cases.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("prolog_output.txt"));
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sorting_results.csv"), "stale,data\n1,2\n3,4\n").unwrap();
    fs::write(
        dir.path().join("prolog_output.txt"),
        "Running algorithms on list:\n[5]\nCPU time: 2\nAlgotype: heap\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(
        fs::read_to_string(dir.path().join("sorting_results.csv")).unwrap(),
        "input_list,heap\r\n[5],2.0\r\n"
    );
}

#[test]
fn unwritable_json_target_leaves_no_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("prolog_output.txt"),
        "Running algorithms on list:\n[3, 1, 2]\nCPU time: 0.0001\nAlgotype: bubble\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &["--json", "nodir/cases.json"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nodir/cases.json"));
    assert!(!dir.path().join("sorting_results.csv").exists());
}

#[test]
fn malformed_cpu_time_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("prolog_output.txt"),
        "Running algorithms on list:\n[1]\nCPU time: 1.2.3\nAlgotype: a\nCPU time: 7e\nAlgotype: b\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("1.2.3"));
    assert!(!dir.path().join("sorting_results.csv").exists());
}
