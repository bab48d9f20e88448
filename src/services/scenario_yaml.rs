use crate::domain::inputs::CostInputs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One scenario file: user-facing labels plus the numeric cost inputs.
/// Fee fields and the tariff rate default to zero; the shipment size
/// defaults to a single unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_name: String,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub msrp: f64,
    pub cost_to_produce: f64,
    #[serde(default)]
    pub tariff_rate: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub storage_cost: f64,
    #[serde(default)]
    pub customs_fee: f64,
    #[serde(default)]
    pub broker_fee: f64,
    #[serde(default)]
    pub other_costs: f64,
    #[serde(default = "default_units_per_shipment")]
    pub units_per_shipment: i64,
}

fn default_units_per_shipment() -> i64 {
    1
}

impl Scenario {
    pub fn cost_inputs(&self) -> CostInputs {
        CostInputs {
            msrp: self.msrp,
            cost_to_produce: self.cost_to_produce,
            tariff_rate: self.tariff_rate,
            shipping_cost: self.shipping_cost,
            storage_cost: self.storage_cost,
            customs_fee: self.customs_fee,
            broker_fee: self.broker_fee,
            other_costs: self.other_costs,
            units_per_shipment: self.units_per_shipment,
        }
    }
}

pub fn deserialize_scenario_from_yaml_str(yaml: &str) -> Result<Scenario, ScenarioYamlError> {
    Ok(serde_yaml::from_str(yaml)?)
}
