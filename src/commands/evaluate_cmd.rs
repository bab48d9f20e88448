use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_evaluation_report;
use crate::domain::history::CalculationHistoryEntry;
use crate::services::analysis::evaluate_scenario_file;
use crate::services::breakdown_chart::write_breakdown_png;
use crate::services::history_json::{load_history, save_history};
use crate::services::report_types::EvaluationReport;
use chrono::Local;

pub fn evaluate_command(cmd: Commands) {
    if let Commands::Evaluate {
        input,
        output,
        chart,
        history,
    } = cmd
    {
        let report = match evaluate_scenario_file(&input) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to evaluate scenario: {e}");
                return;
            }
        };

        println!("{}", format_evaluation_report(&report));

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize evaluation report: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write evaluation report: {e}");
            return;
        }
        println!("Evaluation report written to {output}");

        if let Some(chart_path) = chart {
            match write_breakdown_png(&chart_path, &report.result.breakdown) {
                Ok(()) => println!("Breakdown chart written to {chart_path}"),
                Err(e) => {
                    eprintln!("Failed to render breakdown chart: {e}");
                    return;
                }
            }
        }

        if let Some(history_path) = history {
            match append_to_history(&history_path, &report) {
                Ok(count) => {
                    println!("Calculation appended to {history_path} ({count} entries)")
                }
                Err(e) => eprintln!("Failed to update history log: {e}"),
            }
        }
    }
}

fn append_to_history(
    path: &str,
    report: &EvaluationReport,
) -> Result<usize, crate::services::history_json::HistoryJsonError> {
    let mut history = load_history(path)?;
    history.append(CalculationHistoryEntry {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        scenario_name: report.scenario_name.clone(),
        product_name: report.product_name.clone(),
        sku: report.sku.clone(),
        landed_cost: report.result.landed_cost,
        profit: report.result.profit,
        margin_percentage: report.result.margin_percentage,
        breakeven_price: report.result.breakeven_price,
    });
    save_history(path, &history)?;
    Ok(history.len())
}
