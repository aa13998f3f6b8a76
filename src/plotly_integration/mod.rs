//! Plotly integration module
//!
//! This module bridges twiss tables with the Plotly charting library.
//!
//! Structure:
//! - `figure.rs`: figure entry points and per-panel trace assembly
//! - `layout.rs`: shared three-panel layout (axes, legend, theme)

pub mod figure;
pub mod layout;

// Re-exports
pub use figure::{plot_all, plot_all_with_config, DEFAULT_PRIMARY_LABEL, DEFAULT_SECONDARY_LABEL};
