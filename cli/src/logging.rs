//! Diagnostic logging to stderr.
//!
//! Digests go to stdout; everything here goes to stderr so sum output stays
//! machine-readable.

use tracing_subscriber::EnvFilter;

/// Level used for a given `-v` count.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Priority order:
/// 1) `RUST_LOG`
/// 2) `-v` / `-vv`
/// 3) default (warn)
pub fn init(verbosity: u8) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| level_for(verbosity).to_string());

    let filter = EnvFilter::try_new(env_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .init();
}
