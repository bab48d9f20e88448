use crate::services::cost_model::evaluate;
use crate::services::crossing::{SeriesSide, find_crossing, series_side};
use crate::services::report_types::{
    EvaluationReport, PriceSweepReport, TargetPosition, TariffSweepReport,
};
use crate::services::scenario_yaml::{
    Scenario, ScenarioYamlError, deserialize_scenario_from_yaml_str,
};
use crate::services::sweep::{sweep_by_price, sweep_by_tariff};
use thiserror::Error;

/// Widest tariff rate a scenario file may carry.
const MAX_TARIFF_RATE: f64 = 500.0;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read scenario file: {0}")]
    ReadScenario(#[from] std::io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    ParseScenario(#[from] ScenarioYamlError),
    #[error("msrp must be at least 0.01")]
    InvalidSalePrice,
    #[error("cost to produce must be at least 0.01")]
    InvalidUnitCost,
    #[error("{0} must not be negative")]
    NegativeFee(&'static str),
    #[error("tariff rate {0} is outside the supported range [0, 500]")]
    TariffRateOutOfRange(f64),
    #[error("a sweep needs at least 2 steps, got {0}")]
    InvalidSteps(usize),
    #[error("sweep range is inverted: max {max} is below min {min}")]
    InvertedRange { min: f64, max: f64 },
}

/// Reads, parses, and validates a scenario file. All range checks live
/// here at the input boundary; the cost model itself stays permissive.
pub fn load_scenario(path: &str) -> Result<Scenario, AnalysisError> {
    let yaml = std::fs::read_to_string(path)?;
    let scenario = deserialize_scenario_from_yaml_str(&yaml)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

fn validate_scenario(scenario: &Scenario) -> Result<(), AnalysisError> {
    if scenario.msrp < 0.01 {
        return Err(AnalysisError::InvalidSalePrice);
    }
    if scenario.cost_to_produce < 0.01 {
        return Err(AnalysisError::InvalidUnitCost);
    }
    let fees = [
        ("shipping cost", scenario.shipping_cost),
        ("storage cost", scenario.storage_cost),
        ("customs fee", scenario.customs_fee),
        ("broker fee", scenario.broker_fee),
        ("other costs", scenario.other_costs),
    ];
    for (name, amount) in fees {
        if amount < 0.0 {
            return Err(AnalysisError::NegativeFee(name));
        }
    }
    if !(0.0..=MAX_TARIFF_RATE).contains(&scenario.tariff_rate) {
        return Err(AnalysisError::TariffRateOutOfRange(scenario.tariff_rate));
    }
    Ok(())
}

fn validate_sweep_range(min: f64, max: f64, steps: usize) -> Result<(), AnalysisError> {
    if steps < 2 {
        return Err(AnalysisError::InvalidSteps(steps));
    }
    if max < min {
        return Err(AnalysisError::InvertedRange { min, max });
    }
    Ok(())
}

fn position_for(side: SeriesSide) -> Option<TargetPosition> {
    match side {
        SeriesSide::AboveTarget => Some(TargetPosition::AlwaysAbove),
        SeriesSide::BelowTarget => Some(TargetPosition::AlwaysBelow),
        SeriesSide::CrossesTarget => None,
    }
}

pub fn evaluate_scenario_file(input_path: &str) -> Result<EvaluationReport, AnalysisError> {
    let scenario = load_scenario(input_path)?;
    let inputs = scenario.cost_inputs();
    let result = evaluate(&inputs);

    Ok(EvaluationReport {
        scenario_name: scenario.scenario_name,
        product_name: scenario.product_name,
        sku: scenario.sku,
        inputs,
        result,
    })
}

pub fn sweep_tariff_from_file(
    input_path: &str,
    min_rate: f64,
    max_rate: f64,
    steps: usize,
) -> Result<TariffSweepReport, AnalysisError> {
    validate_sweep_range(min_rate, max_rate, steps)?;
    let scenario = load_scenario(input_path)?;
    let rows = sweep_by_tariff(&scenario.cost_inputs(), min_rate, max_rate, steps);

    let breakeven_tariff_rate = find_crossing(&rows, |r| r.tariff_rate, |r| r.profit, 0.0);
    let profit_position = if breakeven_tariff_rate.is_none() {
        position_for(series_side(&rows, |r| r.profit, 0.0))
    } else {
        None
    };

    Ok(TariffSweepReport {
        scenario_name: scenario.scenario_name,
        product_name: scenario.product_name,
        min_rate,
        max_rate,
        steps,
        breakeven_tariff_rate,
        profit_position,
        rows,
    })
}

pub fn sweep_price_from_file(
    input_path: &str,
    min_factor: f64,
    max_factor: f64,
    steps: usize,
    target_margin: f64,
) -> Result<PriceSweepReport, AnalysisError> {
    validate_sweep_range(min_factor, max_factor, steps)?;
    let scenario = load_scenario(input_path)?;
    let rows = sweep_by_price(&scenario.cost_inputs(), min_factor, max_factor, steps);

    let target_price = find_crossing(&rows, |r| r.msrp, |r| r.margin_percentage, target_margin);
    let margin_position = if target_price.is_none() {
        position_for(series_side(&rows, |r| r.margin_percentage, target_margin))
    } else {
        None
    };

    Ok(PriceSweepReport {
        scenario_name: scenario.scenario_name,
        product_name: scenario.product_name,
        min_factor,
        max_factor,
        steps,
        target_margin,
        target_price,
        margin_position,
        rows,
    })
}
