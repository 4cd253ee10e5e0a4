//! Opt-in log output for the scanner's `tracing` events.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call in a
/// process has any effect. If the host application already installed a
/// global subscriber, that one is kept and this is a no-op. Enable with `RUST_LOG=rulex_lexer=debug`
/// (one event per scan) or `RUST_LOG=rulex_lexer=trace` (one per token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if let Err(err) = installed {
                tracing::debug!(%err, "keeping existing global subscriber");
            }
        }
    });
}
