use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use std::io::Write;
use tempfile::NamedTempFile;

const REFERENCE_REPORT: &str = "Earned amount:
Bubblegum: $202
Toffee: $118
Ice cream: $2250
Milk Chocolate: $1680
Doughnut: $1075
Pancake: $80

Income: $5405
Staff expenses: Other expenses: 
Net income: $4755
";

fn shop_cli() -> Command {
    let mut cmd = Command::cargo_bin("shop_core_cli").unwrap();
    cmd.env_remove("SHOP_CORE_CONFIG");
    cmd
}

#[test]
fn reference_day_prints_full_report() {
    shop_cli()
        .write_stdin("500\n150\n")
        .assert()
        .success()
        .stdout(REFERENCE_REPORT);
}

#[test]
fn amounts_may_share_a_line() {
    shop_cli()
        .write_stdin("500 150")
        .assert()
        .success()
        .stdout(contains("Net income: $4755"));
}

#[test]
fn fractional_expenses_are_reported_with_one_decimal() {
    shop_cli()
        .write_stdin("0.5\n0\n")
        .assert()
        .success()
        .stdout(contains("Net income: $5404.5"));
}

#[test]
fn malformed_amount_aborts() {
    shop_cli()
        .write_stdin("500\nplenty\n")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Income: $5405"))
        .stdout(contains("Net income").not())
        .stderr(contains("`plenty` is not a number"));
}

#[test]
fn missing_amount_aborts() {
    shop_cli()
        .write_stdin("500\n")
        .assert()
        .failure()
        .stderr(contains("Other expenses"));
}

#[test]
fn config_file_switches_currency_and_prints_prices() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"currency": {{"name": "EUR"}}, "show_prices": true}}"#
    )
    .unwrap();

    shop_cli()
        .env("SHOP_CORE_CONFIG", file.path())
        .write_stdin("5 0\n")
        .assert()
        .success()
        .stdout(contains("Prices:\nBubblegum: €2\n"))
        .stdout(contains("Income: €5405"))
        .stdout(contains("Net income: €5400"));
}

#[test]
fn broken_config_file_aborts() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    shop_cli()
        .env("SHOP_CORE_CONFIG", file.path())
        .write_stdin("500\n150\n")
        .assert()
        .failure()
        .stderr(contains("Serialization error"));
}

#[test]
fn rust_log_enables_debug_events_on_stderr() {
    shop_cli()
        .env("RUST_LOG", "shop_core=debug")
        .write_stdin("500\n150\n")
        .assert()
        .success()
        .stdout(REFERENCE_REPORT)
        .stderr(contains("sale recorded"))
        .stderr(contains("expense recorded"));
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    shop_cli()
        .env_remove("RUST_LOG")
        .write_stdin("500\n150\n")
        .assert()
        .success()
        .stderr(contains("sale recorded").not());
}
