use serde::{Deserialize, Serialize};

/// Published sheet the quiz was written against.
pub const DEFAULT_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTl7KuGBmEGEHqavwmPHRCLRvFHwvzSKVcKMRCEw0aWPej50cAVUrA_Oh1PIMSY6yKL4B8OEh7tqR1d/pub?output=csv";

pub const DEFAULT_FETCH_TIMEOUT: &str = "20s";

pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Quiz configuration.
///
/// Example YAML:
/// ```yaml
/// source: "https://example.com/questions.csv"
/// fetch_timeout: "10s"
/// tick_rate_ms: 200
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Question sheet: an http(s) URL, a `file://` URL, or a local path
    #[serde(default = "default_source")]
    pub source: String,

    /// How long a single fetch may take, as a humantime duration ("20s", "1m")
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: String,

    /// TUI redraw tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_fetch_timeout() -> String {
    DEFAULT_FETCH_TIMEOUT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            fetch_timeout: default_fetch_timeout(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
