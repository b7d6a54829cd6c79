//! # Structured Logging
//!
//! Initializes the `tracing` subscriber with environment-based
//! filtering via `RUST_LOG`. All log output is written to stderr so
//! that stdout stays reserved for the progress line.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Call this exactly once, early in `main()`. The `RUST_LOG`
/// environment variable overrides `default_level` when set, using
/// `tracing_subscriber::EnvFilter` directives, e.g.
/// `RUST_LOG=intkey_forge=debug`.
pub fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
