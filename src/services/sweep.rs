use crate::domain::inputs::CostInputs;
use crate::domain::scenario_row::{PriceScenarioRow, TariffScenarioRow};
use crate::services::cost_model::evaluate;

/// Probe price used when a sweep needs a landed cost before any selling
/// price is known. Landed cost is price-independent, so the value itself is
/// irrelevant; the cost model signature simply always takes a price.
const PROBE_MSRP: f64 = 100.0;

/// `steps` evenly spaced values over `[min, max]`, both endpoints included.
/// `steps == 1` degenerates to a single point at `min`. Inverted ranges are
/// passed through untouched and produce descending values.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![min];
    }
    let span = max - min;
    (0..steps)
        .map(|i| {
            if i == steps - 1 {
                max
            } else {
                min + span * (i as f64) / ((steps - 1) as f64)
            }
        })
        .collect()
}

/// Evaluates the cost model once per tariff rate across `[min_rate,
/// max_rate]`, every other input held fixed. Rows come back in swept order,
/// which the crossing solver relies on.
pub fn sweep_by_tariff(
    base: &CostInputs,
    min_rate: f64,
    max_rate: f64,
    steps: usize,
) -> Vec<TariffScenarioRow> {
    linspace(min_rate, max_rate, steps)
        .into_iter()
        .map(|rate| {
            let result = evaluate(&base.with_tariff_rate(rate));
            TariffScenarioRow {
                tariff_rate: rate,
                landed_cost: result.landed_cost,
                profit: result.profit,
                margin_percentage: result.margin_percentage,
                breakeven_price: result.breakeven_price,
            }
        })
        .collect()
}

/// Evaluates the cost model across a selling-price range expressed as
/// multiples of the scenario's landed cost. The reference landed cost is
/// computed with a probe price first, then each swept price is substituted
/// as the msrp.
pub fn sweep_by_price(
    base: &CostInputs,
    min_factor: f64,
    max_factor: f64,
    steps: usize,
) -> Vec<PriceScenarioRow> {
    let reference = evaluate(&base.with_msrp(PROBE_MSRP)).landed_cost;

    linspace(reference * min_factor, reference * max_factor, steps)
        .into_iter()
        .map(|price| {
            let result = evaluate(&base.with_msrp(price));
            PriceScenarioRow {
                msrp: price,
                profit: result.profit,
                margin_percentage: result.margin_percentage,
                landed_cost: result.landed_cost,
            }
        })
        .collect()
}
