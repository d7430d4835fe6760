//! # Tracing Setup
//!
//! Structured logging for the whole mesh. Every device loop logs
//! `Device started` / `Device stopped` with a `device` field, handlers log
//! state changes at `info`, and each processed message is logged at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run                          # state changes only
//! RUST_LOG=home_mesh=debug,device_actor=debug cargo run   # every message
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber filtered by `filter` (`RUST_LOG` syntax).
///
/// An invalid filter falls back to `info`. Calling this twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
