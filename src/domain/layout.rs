// Dashboard page layout model
use super::widgets::{GaugeSpec, SeriesSpec};

/// Content nodes a tab can hold. Images and headings are static
/// decoration; gauges and series carry the rendered data.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Gauge(GaugeSpec),
    Series(SeriesSpec),
    Image { src: String, class: String },
    Heading(String),
}

/// A single navigable section of the dashboard, selected exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub children: Vec<Widget>,
}

impl Tab {
    pub fn new(id: impl Into<String>, title: impl Into<String>, children: Vec<Widget>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children,
        }
    }
}

/// The whole composed page. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title: String,
    pub tabs: Vec<Tab>,
}

impl PageLayout {
    pub fn new(title: impl Into<String>, tabs: Vec<Tab>) -> Self {
        Self {
            title: title.into(),
            tabs,
        }
    }
}
