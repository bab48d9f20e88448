use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_history;
use crate::domain::history::CalculationHistory;
use crate::services::history_json::{load_history, save_history};

pub fn history_command(cmd: Commands) {
    if let Commands::History { log, clear } = cmd {
        if clear {
            match save_history(&log, &CalculationHistory::new()) {
                Ok(()) => println!("Calculation history cleared in {log}"),
                Err(e) => eprintln!("Failed to clear history log: {e}"),
            }
            return;
        }

        match load_history(&log) {
            Ok(history) => println!("{}", format_history(&history)),
            Err(e) => eprintln!("Failed to read history log: {e}"),
        }
    }
}
