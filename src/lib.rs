//! Twiss summary figures
//!
//! This library turns twiss tables (beta functions, closed orbit and
//! dispersion sampled along the beamline) into a three-panel Plotly figure,
//! optionally overlaying a second beam for comparison.
//!
//! Module organization:
//! - `twiss`: twiss table access and derived optics summary
//! - `plotly_integration`: figure and layout assembly on top of Plotly
//! - `config`: figure configuration
//! - `telemetry`: opt-in tracing subscriber setup

pub mod config;
pub mod plotly_integration;
pub mod telemetry;
pub mod twiss;

// Re-exports for convenience
pub use config::PlotConfig;
pub use plotly_integration::{plot_all, plot_all_with_config};
pub use twiss::{OpticsSummary, Result, TwissError, TwissTable};
