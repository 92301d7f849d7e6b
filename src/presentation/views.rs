// HTML views - turn the composed layout into markup
//
// The page is fully static: tab switching is CSS-only (radio inputs plus
// labels), gauges and charts are inline SVG. No script is served.
use maud::{html, Markup, DOCTYPE};

use crate::domain::layout::{PageLayout, Tab, Widget};
use crate::domain::widgets::{ChartKind, GaugeSpec, SeriesSpec};

const SUBTITLE: &str = "Visualisation des paramètres avec un serveur local";

// Gauge geometry: semicircle centered on (100, 100) in a 200x135 viewBox.
const GAUGE_CENTER_X: f64 = 100.0;
const GAUGE_CENTER_Y: f64 = 100.0;
const GAUGE_RADIUS: f64 = 80.0;
const NEEDLE_RADIUS: f64 = 60.0;
const TICK_STEPS: usize = 20;

// Bar chart geometry.
const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 320.0;
const CHART_LEFT: f64 = 52.0;
const CHART_RIGHT: f64 = 12.0;
const CHART_TOP: f64 = 44.0;
const CHART_BOTTOM: f64 = 46.0;

/// Render the whole document for the composed layout.
pub fn render_page(layout: &PageLayout) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (layout.title) }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                header class="page-header" {
                    img class="icon" src="/assets/domaines.png" alt="Domaine agricole";
                    div class="page-titles" {
                        h1 { (layout.title) }
                        h6 { (SUBTITLE) }
                    }
                    img class="icon_iresen" src="/assets/iresen.png" alt="IRESEN";
                }
                main { (tab_bar(&layout.tabs)) }
            }
        }
    }
}

fn tab_bar(tabs: &[Tab]) -> Markup {
    html! {
        div class="tabs" {
            @for (index, tab) in tabs.iter().enumerate() {
                input type="radio" name="tabs" id={ "tab-" (tab.id) } class="tab-input" checked[index == 0];
            }
            nav class="tab-labels" {
                @for tab in tabs {
                    label class="tab-label" for={ "tab-" (tab.id) } { (tab.title) }
                }
            }
            @for tab in tabs {
                section class="tab-panel" id={ "panel-" (tab.id) } {
                    @for widget in &tab.children { (widget_view(widget)) }
                }
            }
        }
    }
}

fn widget_view(widget: &Widget) -> Markup {
    match widget {
        Widget::Heading(text) => html! { h4 { (text) } },
        Widget::Image { src, class } => html! {
            img class=(class) src={ "/assets/" (src) } alt=(src);
        },
        Widget::Gauge(spec) => gauge_view(spec),
        Widget::Series(spec) => chart_view(spec),
    }
}

fn polar(fraction: f64, radius: f64) -> (f64, f64) {
    let angle = std::f64::consts::PI * (1.0 - fraction);
    (
        GAUGE_CENTER_X + radius * angle.cos(),
        GAUGE_CENTER_Y - radius * angle.sin(),
    )
}

fn band_path(from: f64, to: f64) -> String {
    let (x0, y0) = polar(from, GAUGE_RADIUS);
    let (x1, y1) = polar(to, GAUGE_RADIUS);
    format!("M {x0:.1} {y0:.1} A {GAUGE_RADIUS:.0} {GAUGE_RADIUS:.0} 0 0 1 {x1:.1} {y1:.1}")
}

/// Semicircular gauge: one arc per color band, tick marks, a needle, and
/// the numeric value. The printed value is the raw reading; only the
/// needle angle is clamped to the scale when drawing.
fn gauge_view(spec: &GaugeSpec) -> Markup {
    let scale = &spec.scale;
    let span = scale.max - scale.min;

    let mut segments = Vec::new();
    let mut start = scale.min;
    if span > 0.0 {
        for band in &scale.bands {
            let from = ((start - scale.min) / span).clamp(0.0, 1.0);
            let to = ((band.upto - scale.min) / span).clamp(0.0, 1.0);
            if to > from {
                segments.push((band_path(from, to), band.color.clone()));
            }
            start = band.upto;
        }
    }

    let fraction = if span > 0.0 {
        ((spec.value - scale.min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (nx, ny) = polar(fraction, NEEDLE_RADIUS);

    let ticks: Vec<(String, String, String, String)> = (0..=TICK_STEPS)
        .map(|step| {
            let tick = step as f64 / TICK_STEPS as f64;
            let (x0, y0) = polar(tick, GAUGE_RADIUS - 12.0);
            let (x1, y1) = polar(tick, GAUGE_RADIUS - 8.0);
            (
                format!("{x0:.1}"),
                format!("{y0:.1}"),
                format!("{x1:.1}"),
                format!("{y1:.1}"),
            )
        })
        .collect();

    html! {
        figure class="gauge" {
            svg viewBox="0 0 200 135" role="img" {
                @for (path, color) in &segments {
                    path class="gauge-band" d=(path) stroke=(color);
                }
                @for (x0, y0, x1, y1) in &ticks {
                    line class="gauge-tick" x1=(x0) y1=(y0) x2=(x1) y2=(y1);
                }
                line class="gauge-needle"
                    x1="100" y1="100"
                    x2=(format!("{nx:.1}")) y2=(format!("{ny:.1}"));
                circle class="gauge-pivot" cx="100" cy="100" r="5";
                text class="gauge-value" x="100" y="124" text-anchor="middle" {
                    (format!("{:.1}", spec.value)) " " (spec.unit)
                }
            }
            @if !spec.label.is_empty() {
                figcaption { (spec.label) }
            }
        }
    }
}

fn chart_view(spec: &SeriesSpec) -> Markup {
    match spec.kind {
        ChartKind::Bar => bar_chart(spec),
    }
}

/// One bar per historical row, year labels on x, gridlines and axis
/// titles. The full history is drawn as-is, no downsampling.
fn bar_chart(spec: &SeriesSpec) -> Markup {
    let plot_w = CHART_WIDTH - CHART_LEFT - CHART_RIGHT;
    let plot_h = CHART_HEIGHT - CHART_TOP - CHART_BOTTOM;
    let baseline = CHART_TOP + plot_h;

    let y_max = spec.y_values.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let count = spec.y_values.len();
    let slot = if count > 0 { plot_w / count as f64 } else { plot_w };
    let bar_w = slot * 0.6;

    let mid_y = CHART_TOP + plot_h / 2.0;

    html! {
        figure class="chart" {
            svg viewBox={ "0 0 " (CHART_WIDTH as u32) " " (CHART_HEIGHT as u32) } role="img" {
                text class="chart-title" x=(format!("{:.0}", CHART_WIDTH / 2.0)) y="22" text-anchor="middle" {
                    (spec.title)
                }
                @for step in 0..=4 {
                    @let level = y_max * step as f64 / 4.0;
                    @let y = baseline - plot_h * step as f64 / 4.0;
                    line class="chart-grid"
                        x1=(format!("{CHART_LEFT:.0}")) y1=(format!("{y:.1}"))
                        x2=(format!("{:.0}", CHART_LEFT + plot_w)) y2=(format!("{y:.1}"));
                    text class="chart-tick" x=(format!("{:.0}", CHART_LEFT - 6.0)) y=(format!("{:.1}", y + 4.0)) text-anchor="end" {
                        (format!("{level:.0}"))
                    }
                }
                @for (index, value) in spec.y_values.iter().enumerate() {
                    @let height = (value / y_max).max(0.0) * plot_h;
                    @let x = CHART_LEFT + index as f64 * slot + (slot - bar_w) / 2.0;
                    rect class="bar"
                        x=(format!("{x:.1}")) y=(format!("{:.1}", baseline - height))
                        width=(format!("{bar_w:.1}")) height=(format!("{height:.1}"));
                    @if let Some(year) = spec.x_values.get(index) {
                        text class="chart-tick" x=(format!("{:.1}", x + bar_w / 2.0)) y=(format!("{:.0}", baseline + 16.0)) text-anchor="middle" {
                            (year)
                        }
                    }
                }
                line class="chart-axis"
                    x1=(format!("{CHART_LEFT:.0}")) y1=(format!("{CHART_TOP:.0}"))
                    x2=(format!("{CHART_LEFT:.0}")) y2=(format!("{baseline:.0}"));
                line class="chart-axis"
                    x1=(format!("{CHART_LEFT:.0}")) y1=(format!("{baseline:.0}"))
                    x2=(format!("{:.0}", CHART_LEFT + plot_w)) y2=(format!("{baseline:.0}"));
                text class="chart-axis-title" x=(format!("{:.0}", CHART_LEFT + plot_w / 2.0)) y=(format!("{:.0}", CHART_HEIGHT - 8.0)) text-anchor="middle" {
                    "Temps"
                }
                text class="chart-axis-title" x="14" y=(format!("{mid_y:.0}"))
                    text-anchor="middle" transform=(format!("rotate(-90 14 {mid_y:.0})")) {
                    (spec.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::widgets::{GaugeScale, GaugeSpec};

    fn sample_layout() -> PageLayout {
        PageLayout::new(
            "Interface graphique pour serre intelligente",
            vec![
                Tab::new(
                    "overview",
                    "Vue générale",
                    vec![Widget::Gauge(GaugeSpec::new(
                        "Humidité du sol",
                        42.0,
                        "%",
                        GaugeScale::default(),
                    ))],
                ),
                Tab::new(
                    "soil-moisture",
                    "Humidité du sol",
                    vec![Widget::Series(SeriesSpec::new(
                        "Humidité du sol VS Temps",
                        "Humidité du sol",
                        vec![2020, 2021],
                        vec![40.0, 42.0],
                        ChartKind::Bar,
                    ))],
                ),
            ],
        )
    }

    #[test]
    fn test_page_has_one_input_and_panel_per_tab() {
        let page = render_page(&sample_layout()).into_string();
        assert_eq!(page.matches("class=\"tab-input\"").count(), 2);
        assert_eq!(page.matches("class=\"tab-panel\"").count(), 2);
        assert_eq!(page.matches("checked").count(), 1);
        assert!(page.contains("id=\"tab-overview\""));
        assert!(page.contains("Vue générale"));
    }

    #[test]
    fn test_gauge_draws_one_arc_per_band_and_raw_value() {
        let gauge = gauge_view(&GaugeSpec::new("CO2", 120.5, "mg/L", GaugeScale::default()))
            .into_string();
        assert_eq!(gauge.matches("class=\"gauge-band\"").count(), 3);
        assert!(gauge.contains("120.5 mg/L"));
        assert!(gauge.contains("<figcaption>CO2</figcaption>"));
    }

    #[test]
    fn test_gauge_without_label_has_no_caption() {
        let gauge =
            gauge_view(&GaugeSpec::new("", 40.0, "%", GaugeScale::default())).into_string();
        assert!(!gauge.contains("figcaption"));
    }

    #[test]
    fn test_bar_chart_draws_one_bar_per_row() {
        let chart = bar_chart(&SeriesSpec::new(
            "Ensoleillement VS Temps",
            "Ensoleillement",
            vec![2019, 2020, 2021],
            vec![50.0, 52.0, 55.0],
            ChartKind::Bar,
        ))
        .into_string();
        assert_eq!(chart.matches("class=\"bar\"").count(), 3);
        assert!(chart.contains("Ensoleillement VS Temps"));
        assert!(chart.contains(">2021</text>"));
        assert!(chart.contains(">Temps</text>"));
    }

    #[test]
    fn test_bar_chart_handles_empty_series() {
        let chart = bar_chart(&SeriesSpec::new(
            "CO2 VS Temps",
            "CO2",
            Vec::new(),
            Vec::new(),
            ChartKind::Bar,
        ))
        .into_string();
        assert_eq!(chart.matches("class=\"bar\"").count(), 0);
        assert!(chart.contains("CO2 VS Temps"));
    }
}
