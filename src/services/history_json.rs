use crate::domain::history::CalculationHistory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryJsonError {
    #[error("failed to access history log: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse history log: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the session history log. A log that does not exist yet reads as an
/// empty history.
pub fn load_history(path: &str) -> Result<CalculationHistory, HistoryJsonError> {
    if !std::path::Path::new(path).exists() {
        return Ok(CalculationHistory::new());
    }
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn save_history(path: &str, history: &CalculationHistory) -> Result<(), HistoryJsonError> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json)?;
    Ok(())
}
