//! Diagnostic tracing.
//!
//! Step start/finish events are emitted through `tracing` and only shown when
//! `RUST_LOG` asks for them. The default level is `warn`, so a normal run
//! prints nothing beyond the progress message and the tools' own output.
//! `RUST_LOG=info` adds a line naming the step that stopped the run.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=oxidized_lint=debug oxidized-lint
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
