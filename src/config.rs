//! Figure configuration
//!
//! Configuration is read from an optional JSON properties document (flat
//! name/value map, e.g. the contents of a `plot_config.json` next to a
//! study notebook). All defaults reproduce the standard summary figure:
//! 1000x1000 pixels, `plotly_white` template, legend group gap of 200.

use serde_json::{Map, Value};
use tracing::warn;

use crate::twiss::{Result, TwissError};

/// Reads figure properties with type-safe conversions
pub struct PropertyReader {
    properties: Map<String, Value>,
}

impl PropertyReader {
    /// Create from a properties map (may be None if no properties set)
    pub fn new(properties: Option<&Map<String, Value>>) -> Self {
        Self {
            properties: properties.cloned().unwrap_or_default(),
        }
    }

    /// Get raw property value (None if not set or empty)
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).and_then(|v| match v {
            Value::Null => None,
            // Empty string = not set
            Value::String(s) if s.is_empty() => None,
            other => Some(other),
        })
    }

    /// Get string property with explicit default
    ///
    /// Numbers and booleans are accepted and stringified, so `"1000"` and
    /// `1000` configure a dimension the same way.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.get_raw(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => {
                warn!(property = name, value = %other, "invalid string property, using default");
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    /// Get usize property with validation and explicit default
    pub fn get_usize(&self, name: &str, default: usize) -> usize {
        match self.get_raw(name) {
            Some(Value::Number(n)) if n.as_u64().is_some() => n.as_u64().unwrap() as usize,
            Some(Value::String(s)) if s.parse::<usize>().is_ok() => s.parse().unwrap(),
            Some(other) => {
                warn!(property = name, value = %other, "invalid integer property, using default");
                default
            }
            None => default,
        }
    }

    /// Get boolean property (accepts "true"/"false" strings) with explicit default
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.get_raw(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s == "true" => true,
            Some(Value::String(s)) if s == "false" => false,
            Some(other) => {
                warn!(property = name, value = %other, "invalid boolean property, using default");
                default
            }
            None => default,
        }
    }
}

/// Figure dimension - either explicit pixels or "auto"
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlotDimension {
    #[default]
    Auto,
    Pixels(usize),
}

impl PlotDimension {
    /// Parse from a string property value
    ///
    /// Valid formats:
    /// - "auto" or "" (empty) -> Auto
    /// - "1500" -> Pixels(1500) if in valid range [100, 10000]
    pub fn from_str(value: &str, default: PlotDimension) -> Self {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return PlotDimension::Auto;
        }

        match trimmed.parse::<usize>() {
            Ok(px) if (100..=10000).contains(&px) => PlotDimension::Pixels(px),
            Ok(px) => {
                warn!(
                    pixels = px,
                    "figure dimension out of valid range [100-10000], using default"
                );
                default
            }
            Err(_) => {
                warn!(value = trimmed, "invalid figure dimension, using default");
                default
            }
        }
    }

    /// Resolve to actual pixels; Auto is the standard 1000 px summary size
    pub fn resolve(&self) -> usize {
        match self {
            PlotDimension::Pixels(px) => *px,
            PlotDimension::Auto => 1000,
        }
    }
}

/// Figure configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Template name: "plotly_white" (default) or "plotly_dark"
    pub theme: String,

    /// Figure width (pixels or Auto)
    pub plot_width: PlotDimension,

    /// Figure height (pixels or Auto)
    pub plot_height: PlotDimension,

    /// Vertical gap between legend groups, in pixels
    pub legend_group_gap: usize,

    /// Render the tune/chromaticity title when the table carries the
    /// summary scalar columns
    pub show_summary_title: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::from_properties(None)
    }
}

impl PlotConfig {
    /// Create config from a properties map
    ///
    /// Unset or invalid properties fall back to the standard summary
    /// figure defaults.
    pub fn from_properties(properties: Option<&Map<String, Value>>) -> Self {
        let props = PropertyReader::new(properties);

        let theme = props.get_string("theme", "plotly_white");

        let plot_width =
            PlotDimension::from_str(&props.get_string("plot.width", "auto"), PlotDimension::Auto);
        let plot_height =
            PlotDimension::from_str(&props.get_string("plot.height", "auto"), PlotDimension::Auto);

        let legend_group_gap = props.get_usize("legend.group.gap", 200);

        let show_summary_title = props.get_bool("summary.title", false);

        Self {
            theme,
            plot_width,
            plot_height,
            legend_group_gap,
            show_summary_title,
        }
    }

    /// Parse configuration from a JSON properties document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| TwissError::Config(format!("failed to parse plot properties: {e}")))?;
        Ok(Self::from_properties(Some(&map)))
    }

    /// Resolve figure dimensions to actual pixels, (width, height)
    pub fn resolve_dimensions(&self) -> (usize, usize) {
        (self.plot_width.resolve(), self.plot_height.resolve())
    }
}
