//! Glyphsplit CLI library.

pub mod cli;

use env_logger::{Builder, Env};

/// Initialise logging: `warn` by default, `info` when verbose. `RUST_LOG`
/// takes precedence over both.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level)).init();
}
