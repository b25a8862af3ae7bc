use std::time::Duration;

use url::Url;

/// Endpoint used when `DIAGNOSTICO_SUBMIT_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/submit";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of extra attempts. Retrying is off unless configured.
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Default delay before the first retry; doubles on each further attempt.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

pub const ENV_ENDPOINT: &str = "DIAGNOSTICO_SUBMIT_URL";
pub const ENV_TIMEOUT_SECS: &str = "DIAGNOSTICO_SUBMIT_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "DIAGNOSTICO_SUBMIT_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "DIAGNOSTICO_SUBMIT_RETRY_DELAY_MS";

/// Error type for gateway configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration of the HTTP gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl GatewayConfig {
    /// Create a configuration for an endpoint with default transport settings.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through a variable lookup function.
    ///
    /// Unset or blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let endpoint = get(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(endpoint.trim()).map_err(|source| ConfigError::InvalidUrl {
            var: ENV_ENDPOINT,
            source,
        })?;

        let mut config = Self::new(endpoint);
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(retries) = get(ENV_MAX_RETRIES) {
            config.max_retries = parse_number(ENV_MAX_RETRIES, &retries)?;
        }
        if let Some(ms) = get(ENV_RETRY_DELAY_MS) {
            config.retry_delay = Duration::from_millis(parse_number(ENV_RETRY_DELAY_MS, &ms)?);
        }
        Ok(config)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Allow retrying retryable failures.
    pub fn with_retries(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
