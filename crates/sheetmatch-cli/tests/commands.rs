//! Integration tests for the CLI commands.

use std::path::Path;

use clap::Parser;
use sheetmatch_cli::cli::{Cli, Command, JoinArgs};
use sheetmatch_cli::commands::{run_inspect, run_join, run_suggest};
use sheetmatch_model::CellValue;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write fixture");
}

fn parse(argv: &[&str]) -> Command {
    let mut full = vec!["sheetmatch"];
    full.extend_from_slice(argv);
    Cli::try_parse_from(full).expect("parse args").command
}

fn join_args(argv: &[&str]) -> JoinArgs {
    let mut full = vec!["join"];
    full.extend_from_slice(argv);
    match parse(&full) {
        Command::Join(args) => args,
        _ => panic!("expected join"),
    }
}

fn fixtures() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "orders.csv",
        "Order,Customer ID,Qty\nA1, c-7 ,2\nA2,C-9,1\nA3,c-7,5\n",
    );
    write(
        dir.path(),
        "customers.csv",
        "customer_id,Name,Qty\nC-7,Alice,10\nC-7,Shadow,0\nC-8,Bob,3\n",
    );
    dir
}

#[test]
fn join_writes_result_file() {
    let dir = fixtures();
    let out = dir.path().join("result.csv");
    let args = join_args(&[
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
        "--master-key",
        "Customer ID",
        "--lookup-key",
        "customer_id",
        "--append",
        "Name,Qty",
        "--output",
        out.to_str().expect("utf-8 path"),
    ]);

    let report = run_join(&args).expect("join");
    assert_eq!(report.outcome.stats.matched, 2);
    assert_eq!(report.outcome.stats.unmatched, 1);
    assert!(report.has_unmatched());
    assert_eq!(report.output.as_deref(), Some(out.as_path()));

    let text = std::fs::read_to_string(&out).expect("read result");
    assert_eq!(
        text,
        "Order,Customer ID,Qty,Name,Qty_matched\n\
         A1, c-7 ,2,Alice,10\n\
         A2,C-9,1,#N/A,#N/A\n\
         A3,c-7,5,Alice,10\n"
    );
}

#[test]
fn exact_mode_and_dry_run() {
    let dir = fixtures();
    let args = join_args(&[
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
        "--master-key",
        "Customer ID",
        "--lookup-key",
        "customer_id",
        "--append",
        "Name",
        "--exact",
        "--dry-run",
    ]);

    let report = run_join(&args).expect("join");
    assert!(!report.config.fuzzy);
    assert_eq!(report.outcome.stats.matched, 0);
    assert_eq!(report.output, None);
    assert_eq!(
        report.outcome.rows[0].get("Name"),
        Some(&CellValue::from("#N/A"))
    );
}

#[test]
fn suggest_flag_fills_missing_keys() {
    let dir = fixtures();
    let args = join_args(&[
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
        "--append",
        "Name",
        "--suggest",
        "--dry-run",
    ]);

    let report = run_join(&args).expect("join");
    assert_eq!(report.config.master_key, "Customer ID");
    assert_eq!(report.config.lookup_key, "customer_id");
    assert!(report.suggestion.is_some());
    assert_eq!(report.outcome.stats.matched, 2);
}

#[test]
fn job_file_drives_join() {
    let dir = fixtures();
    write(
        dir.path(),
        "job.toml",
        "master = \"orders.csv\"\n\
         lookup = \"customers.csv\"\n\
         master_key = \"Customer ID\"\n\
         lookup_key = \"customer_id\"\n\
         append = [\"Name\"]\n\
         output = \"from_job.json\"\n",
    );
    let args = join_args(&["--config", dir.path().join("job.toml").to_str().expect("utf-8 path")]);

    let report = run_join(&args).expect("join");
    let out = dir.path().join("from_job.json");
    assert_eq!(report.output.as_deref(), Some(out.as_path()));
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read result")).expect("json");
    assert_eq!(parsed[0]["Name"], "Alice");
    assert_eq!(parsed[1]["Name"], "#N/A");
}

#[test]
fn invalid_configuration_is_rejected() {
    let dir = fixtures();
    let args = join_args(&[
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
        "--master-key",
        "Customer ID",
        "--lookup-key",
        "customer_id",
        "--append",
        "Email",
        "--dry-run",
    ]);
    let err = run_join(&args).unwrap_err();
    assert_eq!(
        err.to_string(),
        "append column 'Email' not found in lookup sheet 'customers'"
    );

    let args = join_args(&[
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
        "--append",
        "Name",
        "--dry-run",
    ]);
    let err = run_join(&args).unwrap_err();
    assert_eq!(err.to_string(), "no master key column selected");
}

#[test]
fn same_folder_defaults_lookup_to_other_sheet() {
    let dir = TempDir::new().expect("tempdir");
    let book = dir.path().join("book");
    std::fs::create_dir(&book).expect("mkdir");
    write(&book, "1_orders.csv", "id,qty\n1,2\n2,3\n");
    write(&book, "2_people.csv", "id,name\n2,Bea\n");
    let book_path = book.to_str().expect("utf-8 path");

    let args = join_args(&[
        book_path,
        book_path,
        "--master-key",
        "id",
        "--lookup-key",
        "id",
        "--append",
        "name",
        "--dry-run",
    ]);
    let report = run_join(&args).expect("join");
    assert_eq!(report.master.sheet, "1_orders");
    assert_eq!(report.lookup.sheet, "2_people");
    assert_eq!(report.outcome.stats.matched, 1);
}

#[test]
fn inspect_and_suggest_commands() {
    let dir = fixtures();
    let Command::Inspect(args) = parse(&["inspect", dir.path().to_str().expect("utf-8 path")])
    else {
        panic!("expected inspect");
    };
    let book = run_inspect(&args).expect("inspect");
    assert_eq!(book.sheet_names(), vec!["customers", "orders"]);

    let Command::Suggest(args) = parse(&[
        "suggest",
        dir.path().join("orders.csv").to_str().expect("utf-8 path"),
        dir.path().join("customers.csv").to_str().expect("utf-8 path"),
    ]) else {
        panic!("expected suggest");
    };
    let report = run_suggest(&args).expect("suggest");
    let suggestion = report.suggestion.expect("suggestion");
    assert_eq!(suggestion.left_key, "Customer ID");
    assert_eq!(suggestion.right_key, "customer_id");
}

#[test]
fn same_named_folders_are_different_sources() {
    let dir = TempDir::new().expect("tempdir");
    let mut books = Vec::new();
    for year in ["2023", "2024"] {
        let book = dir.path().join(year).join("exports");
        std::fs::create_dir_all(&book).expect("mkdir");
        write(&book, "1_orders.csv", "id,qty\n1,2\n2,3\n");
        write(&book, "2_people.csv", "id,name\n2,Bea\n");
        books.push(book);
    }

    let args = join_args(&[
        books[0].to_str().expect("utf-8 path"),
        books[1].to_str().expect("utf-8 path"),
        "--master-key",
        "id",
        "--lookup-key",
        "id",
        "--append",
        "qty",
        "--dry-run",
    ]);
    let report = run_join(&args).expect("join");
    assert_eq!(report.master.workbook, report.lookup.workbook);
    assert_eq!(report.lookup.sheet, "1_orders");
    assert_eq!(report.outcome.stats.matched, 2);
}
