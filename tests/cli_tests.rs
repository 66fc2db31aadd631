//! Command-line surface tests. These exercise argument parsing only; nothing
//! here needs a backend.

use assert_cmd::Command;
use predicates::prelude::*;

fn carteira() -> Command {
    Command::cargo_bin("carteira").unwrap()
}

#[test]
fn help_lists_command_groups() {
    carteira()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("fixed-income"))
        .stdout(predicate::str::contains("quotes"));
}

#[test]
fn version_flag_works() {
    carteira()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_an_error() {
    carteira().assert().failure();
}

#[test]
fn operations_add_rejects_unknown_movement() {
    carteira()
        .args([
            "operations",
            "add",
            "--asset",
            "1",
            "hold",
            "100",
            "30.00",
            "2026-01-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hold"));
}

#[test]
fn quotes_batch_requires_at_least_one_ticker() {
    carteira().args(["quotes", "batch"]).assert().failure();
}

#[test]
fn assets_show_help_documents_no_quotes() {
    carteira()
        .args(["assets", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-quotes"));
}
