//! Figure assembly
//!
//! Builds the three-panel twiss summary: beta functions on top, closed
//! orbit in the middle, dispersion at the bottom. Each panel shows the
//! horizontal quantity of each dataset by default and keeps the vertical
//! quantity collapsed to its legend entry until the user re-enables it.

use plotly::common::{Mode, Visible};
use plotly::{Plot, Scatter};
use tracing::debug;

use super::layout::summary_layout;
use crate::config::PlotConfig;
use crate::twiss::{OpticsSummary, Result, TwissTable};

/// Label used for the primary dataset when none is supplied
pub const DEFAULT_PRIMARY_LABEL: &str = "beam 1";
/// Label used for the secondary dataset when none is supplied
pub const DEFAULT_SECONDARY_LABEL: &str = "beam_2";

/// One quantity plotted in a panel
struct Quantity {
    column: &'static str,
    symbol: &'static str,
}

/// One of the three stacked panels
struct Panel {
    primary: Quantity,
    secondary: Quantity,
    y_axis: &'static str,
}

const PANELS: [Panel; 3] = [
    Panel {
        primary: Quantity {
            column: "betx",
            symbol: r"\beta_x",
        },
        secondary: Quantity {
            column: "bety",
            symbol: r"\beta_y",
        },
        y_axis: "y",
    },
    Panel {
        primary: Quantity {
            column: "x",
            symbol: "x",
        },
        secondary: Quantity {
            column: "y",
            symbol: "y",
        },
        y_axis: "y2",
    },
    Panel {
        primary: Quantity {
            column: "dx",
            symbol: r"D_x",
        },
        secondary: Quantity {
            column: "dy",
            symbol: r"D_y",
        },
        y_axis: "y3",
    },
];

/// Build the twiss summary figure with the default configuration
///
/// # Arguments
/// * `primary` - required twiss table
/// * `secondary` - optional comparison table, overlaid in every panel
/// * `name_1` / `name_2` - dataset legend labels; defaults apply when None
pub fn plot_all(
    primary: &TwissTable,
    secondary: Option<&TwissTable>,
    name_1: Option<&str>,
    name_2: Option<&str>,
) -> Result<Plot> {
    plot_all_with_config(primary, secondary, name_1, name_2, &PlotConfig::default())
}

/// Build the twiss summary figure with an explicit configuration
pub fn plot_all_with_config(
    primary: &TwissTable,
    secondary: Option<&TwissTable>,
    name_1: Option<&str>,
    name_2: Option<&str>,
    config: &PlotConfig,
) -> Result<Plot> {
    let name_1 = name_1.unwrap_or(DEFAULT_PRIMARY_LABEL);
    let name_2 = name_2.unwrap_or(DEFAULT_SECONDARY_LABEL);

    let mut plot = Plot::new();

    for panel in &PANELS {
        append_panel_traces(&mut plot, panel, primary, name_1)?;
        if let Some(other) = secondary {
            append_panel_traces(&mut plot, panel, other, name_2)?;
        }
    }

    let title = if config.show_summary_title {
        OpticsSummary::from_table(primary).map(|s| s.title_text())
    } else {
        None
    };

    plot.set_layout(summary_layout(config, title));

    debug!(
        rows = primary.n_rows(),
        datasets = if secondary.is_some() { 2 } else { 1 },
        "assembled twiss summary figure"
    );

    Ok(plot)
}

/// Append one dataset's pair of traces to a panel
///
/// The panel's primary quantity is visible; the secondary quantity keeps
/// its legend entry but starts collapsed (`legendonly`).
fn append_panel_traces(
    plot: &mut Plot,
    panel: &Panel,
    table: &TwissTable,
    label: &str,
) -> Result<()> {
    let s = table.samples("s")?;

    plot.add_trace(line_trace(
        s.clone(),
        table.samples(panel.primary.column)?,
        series_name(panel.primary.symbol, label),
        panel.y_axis,
        false,
    ));
    plot.add_trace(line_trace(
        s,
        table.samples(panel.secondary.column)?,
        series_name(panel.secondary.symbol, label),
        panel.y_axis,
        true,
    ));

    Ok(())
}

/// LaTeX series name, label interpolated verbatim
fn series_name(symbol: &str, label: &str) -> String {
    format!(r"${} \text{{ {}}}$", symbol, label)
}

fn line_trace(
    s: Vec<f64>,
    values: Vec<f64>,
    name: String,
    y_axis: &'static str,
    legend_only: bool,
) -> Box<Scatter<f64, f64>> {
    let trace = Scatter::new(s, values)
        .mode(Mode::Lines)
        .name(name)
        .show_legend(true)
        .x_axis("x")
        .y_axis(y_axis);

    if legend_only {
        trace.visible(Visible::LegendOnly)
    } else {
        trace
    }
}
