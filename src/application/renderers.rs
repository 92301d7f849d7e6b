// Widget renderers - map dataset columns onto gauge and chart descriptors
use crate::domain::dataset::{SensorColumn, SensorDataset};
use crate::domain::error::RenderError;
use crate::domain::widgets::{ChartKind, GaugeScale, GaugeSpec, SeriesSpec};

/// Build a gauge over the most recent reading of `column_name`.
///
/// The value is passed through exactly as measured; readings outside the
/// scale are left for the display layer to interpret.
pub fn render_gauge(
    label: &str,
    column_name: &str,
    unit: &str,
    scale: &GaugeScale,
    dataset: &SensorDataset,
) -> Result<GaugeSpec, RenderError> {
    let column = column_name.parse::<SensorColumn>()?;
    let latest = dataset.latest()?;
    Ok(GaugeSpec::new(
        label,
        latest.value(column),
        unit,
        scale.clone(),
    ))
}

/// Build a bar chart of the full history of `column_name` against the
/// time column, in row order, with no resampling.
pub fn render_series(
    column_name: &str,
    label: &str,
    dataset: &SensorDataset,
) -> Result<SeriesSpec, RenderError> {
    let y_values = dataset.column(column_name)?;
    Ok(SeriesSpec::new(
        format!("{label} VS Temps"),
        label,
        dataset.years(),
        y_values,
        ChartKind::Bar,
    ))
}
