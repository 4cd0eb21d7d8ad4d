use super::schema::Config;
use std::time::Duration;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.source.trim().is_empty() {
        errors.push("source: must not be empty".to_string());
    }

    match humantime::parse_duration(config.fetch_timeout.trim()) {
        Ok(d) if d.is_zero() => {
            errors.push("fetch_timeout: must be greater than zero".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!(
            "fetch_timeout: invalid duration '{}' - {}",
            config.fetch_timeout, e
        )),
    }

    if config.tick_rate_ms == 0 {
        errors.push("tick_rate_ms: must be greater than zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parsed fetch timeout. Call after `validate_config`; falls back to 20s otherwise.
pub fn fetch_timeout(config: &Config) -> Duration {
    humantime::parse_duration(config.fetch_timeout.trim()).unwrap_or(Duration::from_secs(20))
}
