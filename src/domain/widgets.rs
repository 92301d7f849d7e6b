// Widget descriptors produced by the renderers

/// One color band of a gauge scale, covering values up to `upto`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBand {
    pub upto: f64,
    pub color: String,
}

impl ColorBand {
    pub fn new(upto: f64, color: impl Into<String>) -> Self {
        Self {
            upto,
            color: color.into(),
        }
    }
}

/// Display range of a gauge with its ordered color bands.
///
/// The default is the scale the dashboards have always used: 0 to 100 for
/// every sensor regardless of physical unit, green below 60, yellow below
/// 80, red up to 100. It is an explicit value so a deployment can correct
/// it from configuration instead of code.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeScale {
    pub min: f64,
    pub max: f64,
    pub bands: Vec<ColorBand>,
}

impl Default for GaugeScale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            bands: vec![
                ColorBand::new(60.0, "green"),
                ColorBand::new(80.0, "yellow"),
                ColorBand::new(100.0, "red"),
            ],
        }
    }
}

/// Single-value gauge bound to the most recent reading of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub scale: GaugeScale,
}

impl GaugeSpec {
    pub fn new(label: impl Into<String>, value: f64, unit: impl Into<String>, scale: GaugeScale) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
            scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
}

/// Full-history chart of one column against the time column.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub title: String,
    pub label: String,
    pub x_values: Vec<i32>,
    pub y_values: Vec<f64>,
    pub kind: ChartKind,
}

impl SeriesSpec {
    pub fn new(
        title: impl Into<String>,
        label: impl Into<String>,
        x_values: Vec<i32>,
        y_values: Vec<f64>,
        kind: ChartKind,
    ) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            x_values,
            y_values,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_matches_historical_bands() {
        let scale = GaugeScale::default();
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 100.0);
        let thresholds: Vec<f64> = scale.bands.iter().map(|b| b.upto).collect();
        assert_eq!(thresholds, vec![60.0, 80.0, 100.0]);
    }
}
