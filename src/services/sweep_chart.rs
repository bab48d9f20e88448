use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepChartError {
    #[error("sweep has no rows to plot")]
    EmptySweep,
    #[error("failed to render sweep chart: {0}")]
    Render(String),
}

/// One plotted sweep point: swept axis value, profit, margin percentage.
pub type SweepPoint = (f64, f64, f64);

/// Renders a sweep as a dual-axis line chart PNG: profit on the primary
/// y-axis, margin on the secondary, a zero-profit reference line, and a
/// marker at the crossing point when one exists.
pub fn write_sweep_png(
    output_path: &str,
    caption: &str,
    x_desc: &str,
    points: &[SweepPoint],
    crossing: Option<f64>,
) -> Result<(), SweepChartError> {
    if points.is_empty() {
        return Err(SweepChartError::EmptySweep);
    }

    let (x_min, x_max) = padded_range(points.iter().map(|(x, _, _)| *x));
    let (profit_min, profit_max) = padded_range(points.iter().map(|(_, p, _)| *p));
    let (margin_min, margin_max) = padded_range(points.iter().map(|(_, _, m)| *m));
    // Keep zero visible so the reference line stays on the chart.
    let profit_min = profit_min.min(0.0);
    let profit_max = profit_max.max(0.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SweepChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .right_y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, profit_min..profit_max)
        .map_err(|e| SweepChartError::Render(e.to_string()))?
        .set_secondary_coord(x_min..x_max, margin_min..margin_max);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc("Profit ($)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| SweepChartError::Render(e.to_string()))?;

    chart
        .configure_secondary_axes()
        .y_desc("Margin (%)")
        .draw()
        .map_err(|e| SweepChartError::Render(e.to_string()))?;

    let profit_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            points.iter().map(|(x, profit, _)| (*x, *profit)),
            profit_color.stroke_width(2),
        ))
        .map_err(|e| SweepChartError::Render(e.to_string()))?
        .label("Profit")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], profit_color));

    let margin_color = RGBColor(35, 178, 190);
    chart
        .draw_secondary_series(LineSeries::new(
            points.iter().map(|(x, _, margin)| (*x, *margin)),
            margin_color.stroke_width(2),
        ))
        .map_err(|e| SweepChartError::Render(e.to_string()))?
        .label("Margin")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], margin_color));

    // Zero-profit reference line.
    chart
        .draw_series(LineSeries::new(
            [(x_min, 0.0), (x_max, 0.0)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| SweepChartError::Render(e.to_string()))?;

    if let Some(x_cross) = crossing {
        chart
            .draw_series(std::iter::once(Circle::new(
                (x_cross, 0.0),
                5,
                RED.filled(),
            )))
            .map_err(|e| SweepChartError::Render(e.to_string()))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| SweepChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| SweepChartError::Render(e.to_string()))?;
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    let pad = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        (max - min) * 0.05
    };
    (min - pad, max + pad)
}
