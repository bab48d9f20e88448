use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_price_sweep_report;
use crate::services::analysis::sweep_price_from_file;
use crate::services::sweep_chart::{SweepPoint, write_sweep_png};

pub fn sweep_price_command(cmd: Commands) {
    if let Commands::SweepPrice {
        input,
        output,
        min_factor,
        max_factor,
        steps,
        target_margin,
        chart,
    } = cmd
    {
        let report =
            match sweep_price_from_file(&input, min_factor, max_factor, steps, target_margin) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Failed to sweep selling prices: {e}");
                    return;
                }
            };

        println!("{}", format_price_sweep_report(&report));

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
        println!("Price sweep report written to {output}");

        if let Some(chart_path) = chart {
            let points: Vec<SweepPoint> = report
                .rows
                .iter()
                .map(|row| (row.msrp, row.profit, row.margin_percentage))
                .collect();
            match write_sweep_png(
                &chart_path,
                "Profit Across Selling Prices",
                "Selling price ($)",
                &points,
                report.target_price,
            ) {
                Ok(()) => println!("Sweep chart written to {chart_path}"),
                Err(e) => eprintln!("Failed to render sweep chart: {e}"),
            }
        }
    }
}
