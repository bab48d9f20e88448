use serde::{Deserialize, Serialize};

/// Snapshot of one finished calculation, kept by the presentation layer.
/// The calculation core never reads or writes these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationHistoryEntry {
    pub timestamp: String,
    pub scenario_name: String,
    pub product_name: String,
    pub sku: Option<String>,
    pub landed_cost: f64,
    pub profit: f64,
    pub margin_percentage: f64,
    pub breakeven_price: f64,
}

/// Session calculation log. Appended after each evaluation, cleared only on
/// an explicit user action.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CalculationHistory {
    pub entries: Vec<CalculationHistoryEntry>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        CalculationHistory::default()
    }

    pub fn append(&mut self, entry: CalculationHistoryEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
