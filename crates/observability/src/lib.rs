//! Tracing and logging (shared setup).

/// Initialize process-wide tracing from explicit settings.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_accepts_repeated_configs() {
        init_with(&ObservabilityConfig::default());
        init_with(&ObservabilityConfig {
            filter: "uniinv_assignment=debug".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
