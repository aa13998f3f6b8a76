//! Shared figure layout
//!
//! The three panels are stacked y-axis domains over a single x-axis, so a
//! zoom or pan on any panel propagates to the other two. Domains follow the
//! standard 3x1 grid spacing: panel height 0.2667 of the figure with 0.1
//! gaps, bottom to top.

use plotly::common::Title;
use plotly::layout::themes::{PLOTLY_DARK, PLOTLY_WHITE};
use plotly::layout::{Axis, Legend};
use plotly::Layout;

use crate::config::PlotConfig;

// Panel y-domains, top row first
const BETA_DOMAIN: [f64; 2] = [0.7333, 1.0];
const ORBIT_DOMAIN: [f64; 2] = [0.3667, 0.6333];
const DISPERSION_DOMAIN: [f64; 2] = [0.0, 0.2667];

/// Dispersion panel y-range is clamped regardless of the data; the other
/// panels auto-scale.
pub const DISPERSION_RANGE: [f64; 2] = [-1.5, 2.5];

/// Build the figure layout for the three stacked panels
pub(crate) fn summary_layout(config: &PlotConfig, title: Option<String>) -> Layout {
    let (width, height) = config.resolve_dimensions();

    let template = match config.theme.to_lowercase().as_str() {
        "plotly_dark" | "dark" => &*PLOTLY_DARK,
        _ => &*PLOTLY_WHITE,
    };

    let mut layout = Layout::new()
        .show_legend(true)
        .width(width)
        .height(height)
        .legend(Legend::new().trace_group_gap(config.legend_group_gap))
        .template(template)
        .x_axis(
            Axis::new()
                .title(Title::from(r"$s$"))
                .domain(&[0.0, 1.0])
                .anchor("y3")
                .show_grid(true),
        )
        .y_axis(
            Axis::new()
                .title(Title::from(r"$\beta_{x,y}$ [m]"))
                .domain(&BETA_DOMAIN)
                .anchor("x")
                .show_grid(true),
        )
        .y_axis2(
            Axis::new()
                .title(Title::from(r"(Closed orbit)$_{x,y}$ [m]"))
                .domain(&ORBIT_DOMAIN)
                .anchor("x"),
        )
        .y_axis3(
            Axis::new()
                .title(Title::from(r"$D_{x,y}$ [m]"))
                .domain(&DISPERSION_DOMAIN)
                .anchor("x")
                .range(DISPERSION_RANGE.to_vec()),
        );

    if let Some(text) = title {
        layout = layout.title(Title::from(text.as_str()).x(0.5));
    }

    layout
}
