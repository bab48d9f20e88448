use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the landed cost and profitability of one scenario
    Evaluate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report YAML file
        #[arg(short, long)]
        output: String,
        /// Optional cost-breakdown chart PNG
        #[arg(short, long)]
        chart: Option<String>,
        /// Optional history log (JSON) to append this calculation to
        #[arg(long)]
        history: Option<String>,
    },
    /// Sweep the tariff rate and locate the breakeven rate
    SweepTariff {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report YAML file
        #[arg(short, long)]
        output: String,
        /// Lowest tariff rate in the sweep (%)
        #[arg(long, default_value_t = 0.0)]
        min_rate: f64,
        /// Highest tariff rate in the sweep (%)
        #[arg(long, default_value_t = 100.0)]
        max_rate: f64,
        /// Number of sweep points
        #[arg(short, long, default_value_t = 25)]
        steps: usize,
        /// Optional sweep chart PNG
        #[arg(short, long)]
        chart: Option<String>,
    },
    /// Sweep the selling price and locate the target-margin price
    SweepPrice {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report YAML file
        #[arg(short, long)]
        output: String,
        /// Lowest price as a multiple of landed cost
        #[arg(long, default_value_t = 0.8)]
        min_factor: f64,
        /// Highest price as a multiple of landed cost
        #[arg(long, default_value_t = 2.0)]
        max_factor: f64,
        /// Number of sweep points
        #[arg(short, long, default_value_t = 25)]
        steps: usize,
        /// Margin target to solve for (%)
        #[arg(short, long, default_value_t = 20.0)]
        target_margin: f64,
        /// Optional sweep chart PNG
        #[arg(short, long)]
        chart: Option<String>,
    },
    /// Show or clear the calculation history log
    History {
        /// History log JSON file
        #[arg(short = 'f', long)]
        log: String,
        /// Clear the log instead of showing it
        #[arg(long)]
        clear: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_tariff_defaults_cover_the_ui_range() {
        let args = CliArgs::parse_from([
            "tariffsight",
            "sweep-tariff",
            "-i",
            "scenario.yaml",
            "-o",
            "report.yaml",
        ]);

        if let Commands::SweepTariff {
            min_rate,
            max_rate,
            steps,
            chart,
            ..
        } = args.command
        {
            assert_eq!(min_rate, 0.0);
            assert_eq!(max_rate, 100.0);
            assert_eq!(steps, 25);
            assert_eq!(chart, None);
        } else {
            panic!("expected sweep-tariff command");
        }
    }

    #[test]
    fn sweep_price_defaults_target_a_twenty_percent_margin() {
        let args = CliArgs::parse_from([
            "tariffsight",
            "sweep-price",
            "-i",
            "scenario.yaml",
            "-o",
            "report.yaml",
        ]);

        if let Commands::SweepPrice {
            min_factor,
            max_factor,
            target_margin,
            ..
        } = args.command
        {
            assert_eq!(min_factor, 0.8);
            assert_eq!(max_factor, 2.0);
            assert_eq!(target_margin, 20.0);
        } else {
            panic!("expected sweep-price command");
        }
    }

    #[test]
    fn history_defaults_to_showing_the_log() {
        let args = CliArgs::parse_from(["tariffsight", "history", "-f", "log.json"]);

        if let Commands::History { log, clear } = args.command {
            assert_eq!(log, "log.json");
            assert!(!clear);
        } else {
            panic!("expected history command");
        }
    }
}
