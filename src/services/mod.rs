pub mod analysis;
pub mod breakdown_chart;
pub mod cost_model;
pub mod crossing;
pub mod format;
pub mod history_json;
pub mod report_types;
pub mod scenario_yaml;
pub mod sweep;
pub mod sweep_chart;
