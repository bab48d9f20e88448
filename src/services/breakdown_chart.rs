use crate::domain::result::CostBreakdown;
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakdownChartError {
    #[error("failed to render breakdown chart: {0}")]
    Render(String),
}

/// Renders the per-unit cost components as a bar chart PNG.
pub fn write_breakdown_png(
    output_path: &str,
    breakdown: &CostBreakdown,
) -> Result<(), BreakdownChartError> {
    let components = breakdown.components();
    let max_component = components
        .iter()
        .map(|(_, amount)| *amount)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_y = if max_component <= 0.0 {
        1.0
    } else {
        max_component * 1.1
    };

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BreakdownChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Landed Cost Breakdown", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..components.len() as i32, 0.0..max_y)
        .map_err(|e| BreakdownChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Component")
        .y_desc("Per-unit cost ($)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(components.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            components
                .get(*index as usize)
                .map(|(label, _)| label.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| BreakdownChartError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(components.iter().enumerate().map(|(idx, (_, amount))| {
            Rectangle::new(
                [(idx as i32, 0.0), (idx as i32 + 1, amount.max(0.0))],
                bar_style,
            )
        }))
        .map_err(|e| BreakdownChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| BreakdownChartError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn write_breakdown_png_produces_a_file() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("breakdown-{nanos}.png"));

        let breakdown = CostBreakdown {
            production: 50.0,
            tariff: 12.5,
            shipping: 1.0,
            storage: 0.0,
            customs: 0.25,
            broker: 0.15,
            other: 0.0,
        };

        write_breakdown_png(path.to_str().unwrap(), &breakdown).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
