//! Telemetry helpers for applications embedding `market-chart-rs`.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to
//! the host unless it opts into `init_default_tracing`.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// Honors `RUST_LOG`, defaulting to `info`. Returns `false` when the feature
/// is disabled or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
