pub mod base_commands;
pub mod evaluate_cmd;
pub mod history_cmd;
pub mod report_format;
pub mod sweep_price_cmd;
pub mod sweep_tariff_cmd;
