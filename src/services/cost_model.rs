use crate::domain::inputs::CostInputs;
use crate::domain::result::{CalculationResult, CostBreakdown};

/// Evaluates the landed cost and profitability of one scenario.
///
/// Pure and infallible: inputs are taken as given, including negative or
/// non-finite values. The only corrections applied are the two
/// division-by-zero guards (unit count coerced to 1, margin forced to 0 when
/// `msrp <= 0`). Validation of caller-facing ranges happens at the input
/// boundary, not here.
///
/// The tariff base is the manufacturing cost alone. Freight and fees are
/// never part of the duty calculation; changing that base silently would
/// alter every financial result downstream.
pub fn evaluate(inputs: &CostInputs) -> CalculationResult {
    let units = inputs.effective_units();

    let breakdown = CostBreakdown {
        production: inputs.cost_to_produce,
        tariff: inputs.cost_to_produce * (inputs.tariff_rate / 100.0),
        shipping: inputs.shipping_cost / units,
        storage: inputs.storage_cost / units,
        customs: inputs.customs_fee / units,
        broker: inputs.broker_fee / units,
        other: inputs.other_costs / units,
    };

    let landed_cost = breakdown.total();
    let tariff_amount = breakdown.tariff;
    let profit = inputs.msrp - landed_cost;
    let margin_percentage = if inputs.msrp > 0.0 {
        profit / inputs.msrp * 100.0
    } else {
        0.0
    };

    CalculationResult {
        breakdown,
        landed_cost,
        tariff_amount,
        profit,
        margin_percentage,
        min_profitable_msrp: landed_cost * 1.01,
        breakeven_price: landed_cost,
    }
}
