//! Stderr tracing for planlint diagnostics.
//!
//! Reports (text, JSON, SARIF) and patched plans are written to stdout and
//! never pass through the subscriber, so `RUST_LOG` cannot corrupt them.
//! Rule execution logs at `debug`, per-rule issue counts at `trace`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, from `main`.
///
/// ```bash
/// RUST_LOG=planlint::core=trace planlint check plan.json --tools tools.json
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .init();
}
