//! Tracing setup for applications embedding `twiss-plot`.
//!
//! Kept explicit and opt-in: hosts that already run their own `tracing`
//! subscriber keep full control, and the library itself only emits events.

/// Installs a default `tracing` subscriber when the `telemetry` feature is
/// enabled: env-filtered (`RUST_LOG`, falling back to `info`), compact
/// format, no target column.
///
/// Returns `true` when a subscriber was installed, `false` when the feature
/// is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
