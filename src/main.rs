mod commands;
mod domain;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::evaluate_cmd::evaluate_command;
use crate::commands::history_cmd::history_command;
use crate::commands::sweep_price_cmd::sweep_price_command;
use crate::commands::sweep_tariff_cmd::sweep_tariff_command;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Evaluate { .. } => evaluate_command(cmd),
        cmd @ Commands::SweepTariff { .. } => sweep_tariff_command(cmd),
        cmd @ Commands::SweepPrice { .. } => sweep_price_command(cmd),
        cmd @ Commands::History { .. } => history_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
