use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_tariff_sweep_report;
use crate::services::analysis::sweep_tariff_from_file;
use crate::services::sweep_chart::{SweepPoint, write_sweep_png};

pub fn sweep_tariff_command(cmd: Commands) {
    if let Commands::SweepTariff {
        input,
        output,
        min_rate,
        max_rate,
        steps,
        chart,
    } = cmd
    {
        let report = match sweep_tariff_from_file(&input, min_rate, max_rate, steps) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to sweep tariff rates: {e}");
                return;
            }
        };

        println!("{}", format_tariff_sweep_report(&report));

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize sweep report: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write sweep report: {e}");
            return;
        }
        println!("Tariff sweep report written to {output}");

        if let Some(chart_path) = chart {
            let points: Vec<SweepPoint> = report
                .rows
                .iter()
                .map(|row| (row.tariff_rate, row.profit, row.margin_percentage))
                .collect();
            match write_sweep_png(
                &chart_path,
                "Profit Across Tariff Rates",
                "Tariff rate (%)",
                &points,
                report.breakeven_tariff_rate,
            ) {
                Ok(()) => println!("Sweep chart written to {chart_path}"),
                Err(e) => eprintln!("Failed to render sweep chart: {e}"),
            }
        }
    }
}
