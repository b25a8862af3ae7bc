use async_trait::async_trait;
use diagnostico_types::{GatewayError, Submission, SubmissionGateway};
use reqwest::header;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, GatewayConfig};

/// What the endpoint may say about the outcome.
///
/// Every field is optional; a missing or unparsable body counts as silence.
/// Fields are read as raw values so an odd `ok` never hides the `error` text.
#[derive(Debug, Default, Deserialize)]
struct Reply {
    ok: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl Reply {
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Only an explicit `"ok": false` marks failure.
    fn is_refusal(&self) -> bool {
        self.ok == Some(serde_json::Value::Bool(false))
    }

    fn error_message(self) -> Option<String> {
        match self.error? {
            serde_json::Value::Null => None,
            serde_json::Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}

/// Gateway that POSTs submissions as JSON.
///
/// A submission fails when the endpoint answers with a non-success status or
/// with `"ok": false` in the body; the body's `error` field becomes the
/// message. Transport errors and 5xx answers are retried with exponential
/// backoff when retries are configured.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway from a configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("diagnostico/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    /// Create a gateway configured from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// The gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn send_once(&self, body: Vec<u8>) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(GatewayError::transport)?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(error = %err, "could not read response body");
                Default::default()
            }
        };
        let reply = Reply::parse(&body);

        if !status.is_success() || reply.is_refusal() {
            return Err(GatewayError::rejected(status.as_u16(), reply.error_message()));
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        let body =
            serde_json::to_vec(submission).map_err(|e| GatewayError::Encoding(e.to_string()))?;

        let mut attempt = 0;
        loop {
            match self.send_once(body.clone()).await {
                Ok(()) => {
                    info!(endpoint = %self.config.endpoint, attempt, "submission accepted");
                    return Ok(());
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = self.config.retry_delay.saturating_mul(1 << attempt.min(16));
                    warn!(error = %err, attempt, ?delay, "submission failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(endpoint = %self.config.endpoint, error = %err, "submission failed");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_parsing() {
        let reply = Reply::parse(br#"{"ok": false, "error": "Duplicado"}"#);
        assert!(reply.is_refusal());
        assert_eq!(reply.error_message().as_deref(), Some("Duplicado"));

        let reply = Reply::parse(b"<html>Bad Gateway</html>");
        assert!(!reply.is_refusal());
        assert_eq!(reply.error_message(), None);

        let reply = Reply::parse(br#"{"error": {"code": 42}}"#);
        assert_eq!(reply.error_message().as_deref(), Some(r#"{"code":42}"#));

        let reply = Reply::parse(br#"{"ok": true, "error": null}"#);
        assert_eq!(reply.error_message(), None);
    }

    #[test]
    fn non_boolean_ok_keeps_error_text() {
        let reply = Reply::parse(br#"{"ok": 0, "error": "Servicio no disponible"}"#);
        assert!(!reply.is_refusal());
        assert_eq!(reply.error_message().as_deref(), Some("Servicio no disponible"));
    }
}
