use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser identification sent with every request, so naive bot filters let us through
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for fetching pages and pacing the scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Whole-request timeout in seconds (connect + read)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause after each fetched page, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Emit JSON lines instead of the text report
    #[serde(default)]
    pub json_output: bool,
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    10
}

/// Default value for delay_secs
fn default_delay_secs() -> u64 {
    1
}

/// Default value for user_agent
fn default_user_agent() -> String {
    BROWSER_USER_AGENT.to_string()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            delay_secs: default_delay_secs(),
            user_agent: default_user_agent(),
            json_output: false,
        }
    }
}

impl FinderConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the pause between fetched pages
    pub fn with_delay(mut self, delay_secs: u64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Switch between the text report and JSON lines
    pub fn with_json_output(mut self, json_output: bool) -> Self {
        self.json_output = json_output;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::new();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
        assert!(!config.json_output);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: FinderConfig = serde_json::from_str(r#"{"delay_secs": 0}"#).unwrap();
        assert_eq!(config.delay_secs, 0);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
    }

    #[test]
    fn test_builder_setters() {
        let config = FinderConfig::new()
            .with_timeout(3)
            .with_delay(0)
            .with_user_agent("test-agent")
            .with_json_output(true);
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.delay(), Duration::ZERO);
        assert_eq!(config.user_agent, "test-agent");
        assert!(config.json_output);
    }
}
