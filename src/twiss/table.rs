//! Twiss table access
//!
//! A twiss table is a DataFrame sampled along the beamline: one row per
//! longitudinal position `s`, with named columns for the optics functions.
//! The wrapper enforces no ordering or alignment invariants of its own;
//! column lookup and numeric casting are delegated to polars and polars
//! errors propagate to the caller.

use polars::prelude::*;

use super::error::Result;

/// Columns every twiss table is expected to expose
pub const REQUIRED_COLUMNS: [&str; 7] = ["s", "betx", "bety", "x", "y", "dx", "dy"];

/// Twiss table wrapper
#[derive(Debug, Clone)]
pub struct TwissTable {
    df: DataFrame,
}

impl TwissTable {
    /// Wrap a DataFrame. No validation is performed; missing or non-numeric
    /// columns surface when they are first read.
    pub fn new(df: DataFrame) -> Self {
        TwissTable { df }
    }

    /// Number of samples (rows)
    pub fn n_rows(&self) -> usize {
        self.df.height()
    }

    /// Get underlying polars DataFrame
    pub fn inner(&self) -> &DataFrame {
        &self.df
    }

    /// Fetch a column as f64 samples
    ///
    /// Integer columns are cast to f64. Nulls map to NaN so the chart
    /// library renders a gap instead of dropping the row.
    pub fn samples(&self, column: &str) -> Result<Vec<f64>> {
        let series = self
            .df
            .column(column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;

        Ok(series
            .f64()?
            .into_iter()
            .map(|opt| opt.unwrap_or(f64::NAN))
            .collect())
    }

    /// First value of an optional per-table scalar column
    ///
    /// Twiss scalars (tunes, chromaticities, momentum compaction) arrive as
    /// constant columns when present. Returns None for absent or
    /// non-numeric columns and for empty tables.
    pub fn scalar(&self, column: &str) -> Option<f64> {
        self.df
            .column(column)
            .ok()?
            .as_materialized_series()
            .cast(&DataType::Float64)
            .ok()?
            .f64()
            .ok()?
            .get(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_returns_column_values() {
        let df = df! {
            "s" => [0.0, 10.0, 20.0],
            "betx" => [120.0, 80.5, 95.25]
        }
        .unwrap();
        let table = TwissTable::new(df);

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.samples("s").unwrap(), vec![0.0, 10.0, 20.0]);
        assert_eq!(table.samples("betx").unwrap(), vec![120.0, 80.5, 95.25]);
    }

    #[test]
    fn test_required_columns_are_all_readable() {
        let df = df! {
            "s" => [0.0, 10.0],
            "betx" => [120.0, 80.0],
            "bety" => [80.0, 120.0],
            "x" => [0.001, 0.002],
            "y" => [-0.001, -0.002],
            "dx" => [1.0, 1.1],
            "dy" => [0.0, 0.05]
        }
        .unwrap();
        let table = TwissTable::new(df);

        for column in REQUIRED_COLUMNS {
            assert_eq!(table.samples(column).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_samples_casts_integer_columns() {
        let df = df! {
            "s" => [0i64, 5, 10]
        }
        .unwrap();
        let table = TwissTable::new(df);

        assert_eq!(table.samples("s").unwrap(), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_samples_maps_nulls_to_nan() {
        let df = df! {
            "dx" => [Some(1.5), None, Some(-0.25)]
        }
        .unwrap();
        let table = TwissTable::new(df);

        let samples = table.samples("dx").unwrap();
        assert_eq!(samples[0], 1.5);
        assert!(samples[1].is_nan());
        assert_eq!(samples[2], -0.25);
    }

    #[test]
    fn test_samples_missing_column_propagates_error() {
        let df = df! { "s" => [0.0, 1.0] }.unwrap();
        let table = TwissTable::new(df);

        assert!(table.samples("betx").is_err());
    }

    #[test]
    fn test_scalar_reads_first_value() {
        let df = df! {
            "s" => [0.0, 1.0],
            "qx" => [62.31, 62.31]
        }
        .unwrap();
        let table = TwissTable::new(df);

        assert_eq!(table.scalar("qx"), Some(62.31));
        assert_eq!(table.scalar("qy"), None);
    }

    #[test]
    fn test_scalar_empty_table() {
        let df = df! { "qx" => Vec::<f64>::new() }.unwrap();
        let table = TwissTable::new(df);

        assert_eq!(table.scalar("qx"), None);
    }
}
