use assert_fs::prelude::*;
use predicates::prelude::*;

const BARE_SCENARIO: &str = "scenario_name: Bare
product_name: Widget
msrp: 100.0
cost_to_produce: 50.0
";

#[test]
fn sweep_tariff_reports_rows_and_the_breakeven_rate() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(BARE_SCENARIO).unwrap();

    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    // Profit is 100 - 50 * (1 + rate/100): exactly zero at a 100% tariff.
    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args([
        "sweep-tariff",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_arg,
        "--min-rate",
        "0",
        "--max-rate",
        "120",
        "-s",
        "13",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Breakeven tariff rate: 100.0%"))
        .stdout(predicate::str::contains("0.0% | $50.00 | $50.00 | 50.0%"))
        .stdout(predicate::str::contains(format!(
            "Tariff sweep report written to {output_arg}"
        )));

    let report = std::fs::read_to_string(output_arg).unwrap();
    assert!(report.contains("breakeven_tariff_rate:"));
    assert!(report.contains("rows:"));
    assert!(report.contains("tariff_rate:"));
}

#[test]
fn sweep_tariff_classifies_a_fully_profitable_range() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(BARE_SCENARIO).unwrap();

    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args([
        "sweep-tariff",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--max-rate",
        "50",
        "-s",
        "5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Profitable across the entire range"));
}

#[test]
fn sweep_tariff_renders_a_chart_when_asked() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(BARE_SCENARIO).unwrap();

    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();
    let chart_file = assert_fs::NamedTempFile::new("sweep.png").unwrap();
    let chart_arg = chart_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args([
        "sweep-tariff",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-c",
        chart_arg,
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        format!("Sweep chart written to {chart_arg}"),
    ));

    chart_file.assert(predicate::path::exists());
}

#[test]
fn sweep_tariff_rejects_an_inverted_range() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str(BARE_SCENARIO).unwrap();

    let output_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("tariffsight").unwrap();
    cmd.args([
        "sweep-tariff",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--min-rate",
        "100",
        "--max-rate",
        "0",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("sweep range is inverted"));

    output_file.assert(predicate::path::missing());
}
