//! Logging utilities and structured logging support
//!
//! Log records go to standard error through `env_logger`, filtered by
//! `RUST_LOG`. Standard output is reserved for the second counter.

pub use log::{debug, info, trace, warn};

/// Initialize the logging system
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::try_init();
}
