use crate::domain::inputs::CostInputs;
use crate::domain::result::CalculationResult;
use crate::domain::scenario_row::{PriceScenarioRow, TariffScenarioRow};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct EvaluationReport {
    pub scenario_name: String,
    pub product_name: String,
    pub sku: Option<String>,
    pub inputs: CostInputs,
    pub result: CalculationResult,
}

/// How a swept metric relates to its target when no crossing was found.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetPosition {
    AlwaysAbove,
    AlwaysBelow,
}

#[derive(Serialize, Debug, Clone)]
pub struct TariffSweepReport {
    pub scenario_name: String,
    pub product_name: String,
    pub min_rate: f64,
    pub max_rate: f64,
    pub steps: usize,
    /// Interpolated tariff rate where profit crosses zero, when the sweep
    /// brackets it.
    pub breakeven_tariff_rate: Option<f64>,
    /// Set only when no breakeven exists within the swept range.
    pub profit_position: Option<TargetPosition>,
    pub rows: Vec<TariffScenarioRow>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PriceSweepReport {
    pub scenario_name: String,
    pub product_name: String,
    pub min_factor: f64,
    pub max_factor: f64,
    pub steps: usize,
    pub target_margin: f64,
    /// Interpolated selling price where margin crosses the target, when the
    /// sweep brackets it.
    pub target_price: Option<f64>,
    /// Set only when the margin never crosses the target within the range.
    pub margin_position: Option<TargetPosition>,
    pub rows: Vec<PriceScenarioRow>,
}
