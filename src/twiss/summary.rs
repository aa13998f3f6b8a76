//! Tune and chromaticity summary
//!
//! Twiss tables optionally carry per-table scalars next to the sampled
//! optics functions: tunes (`qx`, `qy`), chromaticities (`dqx`, `dqy`) and
//! the momentum compaction factor. When all five are present they can be
//! rendered as a figure title; the transition gamma is derived as
//! 1/sqrt(momentum_compaction_factor).

use super::table::TwissTable;

/// Scalar optics quantities shown in the figure title
#[derive(Debug, Clone, PartialEq)]
pub struct OpticsSummary {
    pub qx: f64,
    pub qy: f64,
    pub dqx: f64,
    pub dqy: f64,
    pub gamma_tr: f64,
}

impl OpticsSummary {
    /// Read the summary scalars from a table
    ///
    /// Returns None when any scalar column is absent or when the momentum
    /// compaction factor is not positive (no real transition gamma).
    pub fn from_table(table: &TwissTable) -> Option<Self> {
        let qx = table.scalar("qx")?;
        let qy = table.scalar("qy")?;
        let dqx = table.scalar("dqx")?;
        let dqy = table.scalar("dqy")?;
        let alpha_c = table.scalar("momentum_compaction_factor")?;

        if alpha_c <= 0.0 {
            return None;
        }

        Some(OpticsSummary {
            qx,
            qy,
            dqx,
            dqy,
            gamma_tr: 1.0 / alpha_c.sqrt(),
        })
    }

    /// LaTeX title line: tunes at 5 decimals, chromaticities and transition
    /// gamma at 2.
    pub fn title_text(&self) -> String {
        format!(
            r"$q_x = {:.5}\hspace{{0.5cm}} q_y = {:.5}\hspace{{0.5cm}} Q'_x = {:.2}\hspace{{0.5cm}} Q'_y = {:.2}\hspace{{0.5cm}} \gamma_{{tr}} = {:.2}$",
            self.qx, self.qy, self.dqx, self.dqy, self.gamma_tr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table_with_scalars(alpha_c: f64) -> TwissTable {
        let df = df! {
            "s" => [0.0, 1.0],
            "qx" => [62.31, 62.31],
            "qy" => [60.32, 60.32],
            "dqx" => [2.0, 2.0],
            "dqy" => [3.5, 3.5],
            "momentum_compaction_factor" => [alpha_c, alpha_c]
        }
        .unwrap();
        TwissTable::new(df)
    }

    #[test]
    fn test_from_table_derives_transition_gamma() {
        let summary = OpticsSummary::from_table(&table_with_scalars(0.25)).unwrap();
        assert_eq!(summary.qx, 62.31);
        assert_eq!(summary.qy, 60.32);
        assert_eq!(summary.gamma_tr, 2.0);
    }

    #[test]
    fn test_from_table_missing_scalar() {
        let df = df! {
            "s" => [0.0, 1.0],
            "qx" => [62.31, 62.31]
        }
        .unwrap();
        assert!(OpticsSummary::from_table(&TwissTable::new(df)).is_none());
    }

    #[test]
    fn test_from_table_rejects_non_positive_compaction() {
        assert!(OpticsSummary::from_table(&table_with_scalars(0.0)).is_none());
        assert!(OpticsSummary::from_table(&table_with_scalars(-0.1)).is_none());
    }

    #[test]
    fn test_title_formatting() {
        let summary = OpticsSummary {
            qx: 62.31,
            qy: 60.32,
            dqx: 2.0,
            dqy: 3.5,
            gamma_tr: 2.0,
        };
        let title = summary.title_text();

        assert!(title.starts_with("$q_x = 62.31000"));
        assert!(title.contains(r"q_y = 60.32000"));
        assert!(title.contains(r"Q'_x = 2.00"));
        assert!(title.contains(r"Q'_y = 3.50"));
        assert!(title.contains(r"\gamma_{tr} = 2.00"));
        assert!(title.ends_with('$'));
    }
}
