//! Log output for hosts embedding the drawer.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's call. [`init`] is the stock choice: formatted output to stderr,
//! filtered by `RUST_LOG` and falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "sticker_drawer=info";

/// Install the formatted subscriber. Returns `false` if a global subscriber
/// was already set, in which case nothing changes.
pub fn init() -> bool {
    init_with_filter(DEFAULT_FILTER)
}

/// Like [`init`], with a different fallback directive for when `RUST_LOG`
/// is unset or unparsable.
pub fn init_with_filter(fallback: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
