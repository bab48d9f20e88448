pub mod history;
pub mod inputs;
pub mod result;
pub mod scenario_row;
