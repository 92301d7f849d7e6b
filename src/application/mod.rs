// Application layer - pure use-cases over the loaded dataset
pub mod composer;
pub mod renderers;
