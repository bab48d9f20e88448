use serde::Serialize;

/// Per-unit allocation of every cost component. The component sum is the
/// landed cost.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub production: f64,
    pub tariff: f64,
    pub shipping: f64,
    pub storage: f64,
    pub customs: f64,
    pub broker: f64,
    pub other: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.production
            + self.tariff
            + self.shipping
            + self.storage
            + self.customs
            + self.broker
            + self.other
    }

    /// Components as (label, per-unit amount) pairs, in breakdown order.
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("Production", self.production),
            ("Tariff", self.tariff),
            ("Shipping", self.shipping),
            ("Storage", self.storage),
            ("Customs", self.customs),
            ("Broker", self.broker),
            ("Other", self.other),
        ]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub breakdown: CostBreakdown,
    pub landed_cost: f64,
    pub tariff_amount: f64,
    pub profit: f64,
    pub margin_percentage: f64,
    pub min_profitable_msrp: f64,
    pub breakeven_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_total_sums_all_seven_components() {
        let breakdown = CostBreakdown {
            production: 50.0,
            tariff: 12.5,
            shipping: 1.0,
            storage: 0.5,
            customs: 0.25,
            broker: 0.15,
            other: 0.1,
        };

        assert!((breakdown.total() - 64.5).abs() < 1e-9);
    }

    #[test]
    fn components_preserve_breakdown_order() {
        let breakdown = CostBreakdown {
            production: 1.0,
            tariff: 2.0,
            shipping: 3.0,
            storage: 4.0,
            customs: 5.0,
            broker: 6.0,
            other: 7.0,
        };

        let labels: Vec<&str> = breakdown.components().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Production",
                "Tariff",
                "Shipping",
                "Storage",
                "Customs",
                "Broker",
                "Other"
            ]
        );
    }
}
