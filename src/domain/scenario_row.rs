use serde::Serialize;

/// One point of a tariff-rate sweep, in ascending rate order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TariffScenarioRow {
    pub tariff_rate: f64,
    pub landed_cost: f64,
    pub profit: f64,
    pub margin_percentage: f64,
    pub breakeven_price: f64,
}

/// One point of a selling-price sweep, in ascending price order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceScenarioRow {
    pub msrp: f64,
    pub profit: f64,
    pub margin_percentage: f64,
    pub landed_cost: f64,
}
