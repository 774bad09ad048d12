//! Tracing and logging (shared setup).

/// Initialize process-wide tracing/logging from `config`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, output formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat};
