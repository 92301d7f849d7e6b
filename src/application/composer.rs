// Page composer - assembles renderer output into the tabbed layout
use crate::application::renderers::{render_gauge, render_series};
use crate::domain::dataset::SensorDataset;
use crate::domain::error::RenderError;
use crate::domain::layout::{PageLayout, Tab, Widget};
use crate::domain::widgets::GaugeScale;
use crate::infrastructure::config::{SensorTabConfig, WidgetsConfig};

const PAGE_TITLE: &str = "Interface graphique pour serre intelligente";

/// Compose the full navigable page: the overview tab followed by one tab
/// per configured sensor, in configuration order.
///
/// Deterministic and pure; the only failure path is a renderer error,
/// which aborts composition rather than producing a partial page.
pub fn compose_page(
    dataset: &SensorDataset,
    widgets: &WidgetsConfig,
) -> Result<PageLayout, RenderError> {
    let scale = widgets.gauge_scale.to_scale();

    let mut tabs = Vec::with_capacity(widgets.sensors.len() + 1);
    tabs.push(overview_tab(dataset, widgets, &scale)?);
    for sensor in &widgets.sensors {
        tabs.push(sensor_tab(dataset, sensor, &scale)?);
    }

    Ok(PageLayout::new(PAGE_TITLE, tabs))
}

fn overview_tab(
    dataset: &SensorDataset,
    widgets: &WidgetsConfig,
    scale: &GaugeScale,
) -> Result<Tab, RenderError> {
    let mut children = vec![
        Widget::Heading("Image de la serre".to_string()),
        Widget::Image {
            src: widgets.overview.greenhouse_image.clone(),
            class: "serre".to_string(),
        },
        Widget::Heading("Valeur des capteurs".to_string()),
    ];
    for gauge in &widgets.overview.gauges {
        children.push(Widget::Gauge(render_gauge(
            &gauge.label,
            &gauge.column,
            &gauge.unit,
            scale,
            dataset,
        )?));
    }
    Ok(Tab::new("overview", widgets.overview.title.as_str(), children))
}

// Each detail tab binds the sensor's single configured column to both its
// gauge and its history chart.
fn sensor_tab(
    dataset: &SensorDataset,
    sensor: &SensorTabConfig,
    scale: &GaugeScale,
) -> Result<Tab, RenderError> {
    let children = vec![
        Widget::Heading("Emplacement des capteurs".to_string()),
        Widget::Image {
            src: sensor.location_image.clone(),
            class: "img_sensor".to_string(),
        },
        Widget::Heading(sensor.label.clone()),
        Widget::Gauge(render_gauge("", &sensor.column, &sensor.unit, scale, dataset)?),
        Widget::Heading("Image du capteur".to_string()),
        Widget::Image {
            src: sensor.sensor_image.clone(),
            class: "img_capt".to_string(),
        },
        Widget::Series(render_series(&sensor.column, &sensor.label, dataset)?),
    ];
    Ok(Tab::new(sensor.id.as_str(), sensor.label.as_str(), children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::SensorRow;
    use crate::infrastructure::config::{GaugeConfig, GaugeScaleConfig, OverviewConfig};

    fn sample_dataset() -> SensorDataset {
        SensorDataset::new(vec![
            SensorRow::new(2020, 21.5, 40.0, 55.0),
            SensorRow::new(2021, 22.1, 42.0, 58.0),
        ])
    }

    fn sample_config() -> WidgetsConfig {
        WidgetsConfig {
            gauge_scale: GaugeScaleConfig::default(),
            overview: OverviewConfig {
                title: "Vue générale".to_string(),
                greenhouse_image: "serre.png".to_string(),
                gauges: vec![
                    GaugeConfig {
                        label: "Humidité du sol".to_string(),
                        column: "moisture".to_string(),
                        unit: "%".to_string(),
                    },
                    GaugeConfig {
                        label: "Température ambiante".to_string(),
                        column: "temperature".to_string(),
                        unit: "°C".to_string(),
                    },
                ],
            },
            sensors: vec![SensorTabConfig {
                id: "soil-moisture".to_string(),
                label: "Humidité du sol".to_string(),
                column: "moisture".to_string(),
                unit: "%".to_string(),
                location_image: "serre_moist.png".to_string(),
                sensor_image: "moisture.png".to_string(),
            }],
        }
    }

    #[test]
    fn test_compose_builds_overview_plus_one_tab_per_sensor() {
        let page = compose_page(&sample_dataset(), &sample_config()).unwrap();
        assert_eq!(page.tabs.len(), 2);
        assert_eq!(page.tabs[0].id, "overview");
        assert_eq!(page.tabs[0].title, "Vue générale");
        assert_eq!(page.tabs[1].id, "soil-moisture");
    }

    #[test]
    fn test_overview_holds_one_gauge_per_configured_binding() {
        let page = compose_page(&sample_dataset(), &sample_config()).unwrap();
        let gauges: Vec<_> = page.tabs[0]
            .children
            .iter()
            .filter_map(|w| match w {
                Widget::Gauge(g) => Some(g),
                _ => None,
            })
            .collect();
        assert_eq!(gauges.len(), 2);
        assert_eq!(gauges[0].value, 42.0);
        assert_eq!(gauges[1].value, 22.1);
    }

    #[test]
    fn test_sensor_tab_gauge_and_chart_share_one_column() {
        let page = compose_page(&sample_dataset(), &sample_config()).unwrap();
        let tab = &page.tabs[1];
        let gauge = tab.children.iter().find_map(|w| match w {
            Widget::Gauge(g) => Some(g),
            _ => None,
        });
        let series = tab.children.iter().find_map(|w| match w {
            Widget::Series(s) => Some(s),
            _ => None,
        });
        assert_eq!(gauge.unwrap().value, 42.0);
        assert_eq!(series.unwrap().y_values, vec![40.0, 42.0]);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let dataset = sample_dataset();
        let config = sample_config();
        let first = compose_page(&dataset, &config).unwrap();
        let second = compose_page(&dataset, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_propagates_unknown_column() {
        let mut config = sample_config();
        config.sensors[0].column = "co2".to_string();
        let err = compose_page(&sample_dataset(), &config).unwrap_err();
        assert!(matches!(err, RenderError::UnknownColumn(_)));
    }

    #[test]
    fn test_compose_on_empty_dataset_fails_instead_of_partial_page() {
        let err = compose_page(&SensorDataset::new(Vec::new()), &sample_config()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyDataset(_)));
    }
}
