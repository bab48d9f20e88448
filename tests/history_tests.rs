use assert_fs::prelude::*;
use predicates::prelude::*;

const SCENARIO: &str = "scenario_name: Spring import
product_name: Ceramic mug
sku: MUG-12
msrp: 100.0
cost_to_produce: 50.0
tariff_rate: 25.0
shipping_cost: 1000.0
customs_fee: 250.0
broker_fee: 150.0
units_per_shipment: 1000
";

fn evaluate_with_history(scenario_arg: &str, log_arg: &str) {
    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args([
        "evaluate",
        "-i",
        scenario_arg,
        "-o",
        output_file.path().to_str().unwrap(),
        "--history",
        log_arg,
    ]);
    cmd.assert().success();
}

#[test]
fn evaluate_appends_to_the_history_log() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(SCENARIO).unwrap();
    let scenario_arg = scenario_file.path().to_str().unwrap();

    let log_file = assert_fs::NamedTempFile::new("history.json").unwrap();
    let log_arg = log_file.path().to_str().unwrap();

    evaluate_with_history(scenario_arg, log_arg);
    evaluate_with_history(scenario_arg, log_arg);

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args(["history", "-f", log_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculation history (2 entries)"))
        .stdout(predicate::str::contains("Spring import | Ceramic mug"))
        .stdout(predicate::str::contains("$63.90"));
}

#[test]
fn history_clear_empties_the_log() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(SCENARIO).unwrap();

    let log_file = assert_fs::NamedTempFile::new("history.json").unwrap();
    let log_arg = log_file.path().to_str().unwrap();

    evaluate_with_history(scenario_file.path().to_str().unwrap(), log_arg);

    let mut clear_cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    clear_cmd.args(["history", "-f", log_arg, "--clear"]);
    clear_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculation history cleared"));

    let mut show_cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    show_cmd.args(["history", "-f", log_arg]);
    show_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculation history is empty"));
}

#[test]
fn showing_a_missing_log_reads_as_empty() {
    let log_file = assert_fs::NamedTempFile::new("history.json").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args(["history", "-f", log_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculation history is empty"));
}
