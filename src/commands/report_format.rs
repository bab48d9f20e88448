use crate::domain::history::CalculationHistory;
use crate::services::format::{format_currency, format_percent};
use crate::services::report_types::{
    EvaluationReport, PriceSweepReport, TargetPosition, TariffSweepReport,
};

pub fn format_evaluation_report(report: &EvaluationReport) -> String {
    let result = &report.result;
    let breakdown = &result.breakdown;

    let mut lines = Vec::new();
    lines.push("Landed Cost Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario_name));
    lines.push(format!("Product: {}", report.product_name));
    if let Some(sku) = &report.sku {
        lines.push(format!("SKU: {sku}"));
    }
    lines.push(String::new());
    lines.push("Per-unit breakdown:".to_string());
    lines.push("Component | Cost".to_string());
    lines.push("----------|-----".to_string());
    for (label, amount) in breakdown.components() {
        lines.push(format!("{label} | {}", format_currency(amount)));
    }
    lines.push(String::new());
    lines.push(format!("Landed cost: {}", format_currency(result.landed_cost)));
    lines.push(format!("Profit: {}", format_currency(result.profit)));
    lines.push(format!("Margin: {}", format_percent(result.margin_percentage)));
    lines.push(format!(
        "Breakeven price: {}",
        format_currency(result.breakeven_price)
    ));
    lines.push(format!(
        "Minimum profitable price: {}",
        format_currency(result.min_profitable_msrp)
    ));

    lines.join("\n")
}

pub fn format_tariff_sweep_report(report: &TariffSweepReport) -> String {
    let mut lines = Vec::new();
    lines.push("Tariff Sweep Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario_name));
    lines.push(format!(
        "Range: {} to {} in {} steps",
        format_percent(report.min_rate),
        format_percent(report.max_rate),
        report.steps
    ));
    lines.push(match (report.breakeven_tariff_rate, report.profit_position) {
        (Some(rate), _) => format!("Breakeven tariff rate: {}", format_percent(rate)),
        (None, Some(TargetPosition::AlwaysAbove)) => {
            "Profitable across the entire range".to_string()
        }
        (None, Some(TargetPosition::AlwaysBelow)) => {
            "Unprofitable across the entire range".to_string()
        }
        (None, None) => "No breakeven within the swept range".to_string(),
    });
    lines.push(String::new());
    lines.push("Rate | Landed cost | Profit | Margin".to_string());
    lines.push("-----|-------------|--------|-------".to_string());
    for row in &report.rows {
        lines.push(format!(
            "{} | {} | {} | {}",
            format_percent(row.tariff_rate),
            format_currency(row.landed_cost),
            format_currency(row.profit),
            format_percent(row.margin_percentage)
        ));
    }

    lines.join("\n")
}

pub fn format_price_sweep_report(report: &PriceSweepReport) -> String {
    let mut lines = Vec::new();
    lines.push("Price Sweep Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario_name));
    lines.push(format!(
        "Range: {:.2}x to {:.2}x landed cost in {} steps",
        report.min_factor, report.max_factor, report.steps
    ));
    lines.push(match (report.target_price, report.margin_position) {
        (Some(price), _) => format!(
            "Price for a {} margin: {}",
            format_percent(report.target_margin),
            format_currency(price)
        ),
        (None, Some(TargetPosition::AlwaysAbove)) => format!(
            "Margin exceeds {} across the entire range",
            format_percent(report.target_margin)
        ),
        (None, Some(TargetPosition::AlwaysBelow)) => format!(
            "Margin stays below {} across the entire range",
            format_percent(report.target_margin)
        ),
        (None, None) => "No target crossing within the swept range".to_string(),
    });
    lines.push(String::new());
    lines.push("Price | Profit | Margin | Landed cost".to_string());
    lines.push("------|--------|--------|------------".to_string());
    for row in &report.rows {
        lines.push(format!(
            "{} | {} | {} | {}",
            format_currency(row.msrp),
            format_currency(row.profit),
            format_percent(row.margin_percentage),
            format_currency(row.landed_cost)
        ));
    }

    lines.join("\n")
}

pub fn format_history(history: &CalculationHistory) -> String {
    if history.is_empty() {
        return "Calculation history is empty".to_string();
    }

    let mut lines = Vec::new();
    lines.push(format!("Calculation history ({} entries)", history.len()));
    lines.push("Timestamp | Scenario | Product | Landed cost | Profit | Margin".to_string());
    lines.push("----------|----------|---------|-------------|--------|-------".to_string());
    for entry in &history.entries {
        lines.push(format!(
            "{} | {} | {} | {} | {} | {}",
            entry.timestamp,
            entry.scenario_name,
            entry.product_name,
            format_currency(entry.landed_cost),
            format_currency(entry.profit),
            format_percent(entry.margin_percentage)
        ));
    }

    lines.join("\n")
}
