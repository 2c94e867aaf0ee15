//! Opt-in tracing bootstrap for hosts embedding the header engine.
//!
//! Nothing here runs unless the `telemetry` cargo feature is enabled and
//! the host calls [`init_default_tracing`]; applications with their own
//! `tracing` subscriber should wire that instead and skip this module.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Falls back to the `debug` level for this crate's targets when no env
/// filter is set, so header assembly traces show up out of the box during
/// development. Returns `false` when the feature is disabled or another
/// global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gantt_header_rs=debug,info"));

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
