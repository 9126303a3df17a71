use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "day_tally_cli";

fn script_command(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DAY_TALLY_CLI_SCRIPT", "1");
    cmd.env("DAY_TALLY_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn cli_help_command_prints_overview() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("help").or(contains("Available commands")));
}

#[test]
fn cli_version_command_prints_version_info() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("DayTally"));
}

#[test]
fn cli_spend_and_balance_flow_reports_the_remainder() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("spend 145 coffee\nspend 300 lunch\nspend 3000 party 08.11.2019\nbalance rub\nexit\n")
        .assert()
        .success()
        .stdout(contains("555.00 руб"));
}

#[test]
fn cli_eat_and_calories_flow_reports_the_remainder() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("eat 450 breakfast\ncalories\nexit\n")
        .assert()
        .success()
        .stdout(contains("1550").and(contains("kcal")));
}

#[test]
fn cli_unknown_currency_reports_a_lookup_error() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("balance gbp\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown currency: gbp"));
}

#[test]
fn cli_unknown_command_suggests_an_alternative() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("balanc\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command").and(contains("balance")));
}

#[test]
fn cli_config_set_persists_between_sessions() {
    let dir = TempDir::new().expect("temp dir");
    script_command(&dir)
        .write_stdin("config set currency usd\nexit\n")
        .assert()
        .success()
        .stdout(contains("Configuration updated."));
    script_command(&dir)
        .write_stdin("config show\nexit\n")
        .assert()
        .success()
        .stdout(contains("Currency: usd"));
}
