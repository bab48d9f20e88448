use serde::{Deserialize, Serialize};

/// Per-calculation cost inputs. Currency fields are per-unit except the five
/// fee fields, which are per-shipment totals amortized across
/// `units_per_shipment`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostInputs {
    pub msrp: f64,
    pub cost_to_produce: f64,
    pub tariff_rate: f64,
    pub shipping_cost: f64,
    pub storage_cost: f64,
    pub customs_fee: f64,
    pub broker_fee: f64,
    pub other_costs: f64,
    pub units_per_shipment: i64,
}

impl CostInputs {
    /// Shipment size used for fee amortization. A non-positive unit count is
    /// treated as 1 rather than rejected, so fee division never hits zero.
    pub fn effective_units(&self) -> f64 {
        if self.units_per_shipment <= 0 {
            1.0
        } else {
            self.units_per_shipment as f64
        }
    }

    pub fn with_msrp(&self, msrp: f64) -> CostInputs {
        CostInputs { msrp, ..self.clone() }
    }

    pub fn with_tariff_rate(&self, tariff_rate: f64) -> CostInputs {
        CostInputs {
            tariff_rate,
            ..self.clone()
        }
    }
}
