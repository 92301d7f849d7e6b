// Domain layer - dataset, widget descriptors, and page layout
pub mod dataset;
pub mod error;
pub mod layout;
pub mod widgets;
