use serde::Deserialize;

use crate::domain::widgets::{ColorBand, GaugeScale};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
    pub data_file: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Session secret for the embedded web server. Optional: the
    /// GREENHOUSE_SECRET_KEY environment variable takes precedence, and a
    /// random key is generated when neither is set.
    pub secret_key: Option<String>,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl ServerSettings {
    /// Resolve the session secret: environment first, then the config
    /// file, then an ephemeral random key.
    pub fn session_secret(&self) -> String {
        if let Ok(key) = std::env::var("GREENHOUSE_SECRET_KEY") {
            if !key.is_empty() {
                return key;
            }
        }
        if let Some(key) = &self.secret_key {
            return key.clone();
        }
        uuid::Uuid::new_v4().to_string()
    }
}

/// Widget bindings for the dashboard. Every gauge and chart is bound to a
/// dataset column here, never in code, so a mislabeled sensor can be fixed
/// by editing the file.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub gauge_scale: GaugeScaleConfig,
    pub overview: OverviewConfig,
    #[serde(default)]
    pub sensors: Vec<SensorTabConfig>,
}

/// Display range shared by every gauge. The default reproduces the
/// historical 0-100 scale with bands at 60 and 80.
#[derive(Debug, Deserialize, Clone)]
pub struct GaugeScaleConfig {
    pub min: f64,
    pub max: f64,
    pub bands: Vec<BandConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BandConfig {
    pub upto: f64,
    pub color: String,
}

impl Default for GaugeScaleConfig {
    fn default() -> Self {
        let scale = GaugeScale::default();
        Self {
            min: scale.min,
            max: scale.max,
            bands: scale
                .bands
                .into_iter()
                .map(|band| BandConfig {
                    upto: band.upto,
                    color: band.color,
                })
                .collect(),
        }
    }
}

impl GaugeScaleConfig {
    pub fn to_scale(&self) -> GaugeScale {
        GaugeScale {
            min: self.min,
            max: self.max,
            bands: self
                .bands
                .iter()
                .map(|band| ColorBand::new(band.upto, band.color.clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverviewConfig {
    pub title: String,
    pub greenhouse_image: String,
    #[serde(default)]
    pub gauges: Vec<GaugeConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GaugeConfig {
    pub label: String,
    pub column: String,
    pub unit: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SensorTabConfig {
    pub id: String,
    pub label: String,
    pub column: String,
    pub unit: String,
    pub location_image: String,
    pub sensor_image: String,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/widgets"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
