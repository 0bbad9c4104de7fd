//! Environment variable parsing with warn-level logging for invalid values.

use std::time::Duration;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Millisecond duration read through [`env_parse_with_default`]. Zero falls back to the default.
pub fn env_duration_ms(var: &str, default_ms: u64) -> Duration {
    match env_parse_with_default(var, default_ms) {
        0 => {
            tracing::warn!(var, default_ms, "zero duration is not allowed, using default");
            Duration::from_millis(default_ms)
        },
        ms => Duration::from_millis(ms),
    }
}
