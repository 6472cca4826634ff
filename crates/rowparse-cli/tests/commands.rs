//! Integration tests for the `rows` and `check` commands.

use std::io::Write;

use rowparse_cli::commands::{CheckOptions, CheckOutcome, Input, run_check, run_rows};
use rowparse_cli::render::{OutputFormat, failure_table, to_json, to_json_lines, values_table};
use tempfile::NamedTempFile;

const PEOPLE_CSV: &str = "name,age\nAlice,23\nBob,thirty\nCharlie,25\nNim,22\n";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn input(file: &NamedTempFile) -> Input {
    Input::File(file.path().to_path_buf())
}

fn options(columns: &str) -> CheckOptions {
    CheckOptions {
        columns: columns.to_string(),
        ..CheckOptions::default()
    }
}

#[test]
fn rows_returns_every_line() {
    let file = create_temp_csv(PEOPLE_CSV);
    let rows = run_rows(&input(&file)).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2], vec!["Bob", "thirty"]);
}

#[test]
fn rows_json_output() {
    let file = create_temp_csv("a, b\nc\n");
    let rows = run_rows(&input(&file)).unwrap();
    insta::assert_snapshot!(to_json(&rows, OutputFormat::Jsonl).unwrap(), @r#"[["a","b"],["c"]]"#);
}

#[test]
fn rows_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_rows(&Input::File(dir.path().join("missing.csv"))).unwrap_err();
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn check_rejects_header_and_bob() {
    let file = create_temp_csv(PEOPLE_CSV);
    let report = run_check(&input(&file), &options("name:text,age:number")).unwrap();

    assert!(!report.is_valid());
    assert_eq!(report.columns, vec!["name", "age"]);
    let CheckOutcome::Invalid(failure) = &report.outcome else {
        panic!("expected invalid outcome");
    };
    assert_eq!(failure.row_numbers(), vec![1, 3]);
}

#[test]
fn check_skip_header_rejects_only_bob() {
    let file = create_temp_csv(PEOPLE_CSV);
    let options = CheckOptions {
        skip_header: true,
        ..options("name:text,age:number")
    };
    let report = run_check(&input(&file), &options).unwrap();

    let CheckOutcome::Invalid(failure) = &report.outcome else {
        panic!("expected invalid outcome");
    };
    assert_eq!(failure.row_numbers(), vec![3]);

    let rendered = failure_table(failure).to_string();
    assert!(rendered.contains("thirty"));
    assert!(rendered.contains("expected number"));
}

#[test]
fn check_skip_header_drops_header_from_values() {
    let file = create_temp_csv("name,age\nAlice,23\nNim,22\n");
    let options = CheckOptions {
        skip_header: true,
        ..options("name:text,age:integer")
    };
    let report = run_check(&input(&file), &options).unwrap();

    let CheckOutcome::Valid(values) = &report.outcome else {
        panic!("expected valid outcome");
    };
    assert_eq!(values.len(), 2);
    insta::assert_snapshot!(to_json_lines(values).unwrap().replace('\n', " | "), @r#"["Alice",23] | ["Nim",22]"#);

    let rendered = values_table(&report.columns, values).to_string();
    assert!(rendered.contains("Alice"));
    assert!(rendered.contains("age"));
}

#[test]
fn check_allow_extra() {
    let file = create_temp_csv("Alice,23,extra\n");

    let strict = run_check(&input(&file), &options("name:text,age:integer")).unwrap();
    assert!(!strict.is_valid());

    let options = CheckOptions {
        allow_extra: true,
        ..options("name:text,age:integer")
    };
    let lenient = run_check(&input(&file), &options).unwrap();
    assert!(lenient.is_valid());
}

#[test]
fn check_failure_json() {
    let file = create_temp_csv("Bob,thirty\n");
    let report = run_check(&input(&file), &options("name:text,age:number")).unwrap();
    let CheckOutcome::Invalid(failure) = &report.outcome else {
        panic!("expected invalid outcome");
    };
    insta::assert_snapshot!(
        to_json(failure, OutputFormat::Jsonl).unwrap(),
        @r#"{"rows":[{"row":1,"raw":["Bob","thirty"],"issues":[{"code":"type_mismatch","field":1,"expected":"number","found":"thirty"}]}]}"#
    );
}

#[test]
fn check_bad_column_spec_is_an_error() {
    let file = create_temp_csv(PEOPLE_CSV);
    let err = run_check(&input(&file), &options("name:text,age:date")).unwrap_err();
    assert!(err.to_string().contains("invalid column spec"));
}

#[test]
fn check_missing_file_is_an_error_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = Input::File(dir.path().join("missing.csv"));
    assert!(run_check(&missing, &options("name:text")).is_err());
}
