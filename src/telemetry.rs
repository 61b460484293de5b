//! Telemetry helpers for the timeline binary and embedding applications.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing` or wire their own `tracing` subscriber and filters.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Honors `RUST_LOG`; the default filter is `info`, which prints skipped files
/// and catalog entries. Returns `false` when the feature is disabled or a
/// global subscriber was already set by the host application.
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
