//! # diagnostico-gateway-http
//!
//! HTTP submission gateway for diagnostico.
//!
//! Submissions are POSTed as JSON to a configured endpoint. The endpoint
//! signals failure with a non-success status or `{"ok": false, "error": "..."}`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use diagnostico::Wizard;
//! use diagnostico_gateway_http::HttpGateway;
//!
//! let gateway = HttpGateway::from_env()?;
//! let mut wizard = Wizard::new(gateway);
//! ```
//!
//! ## Environment
//!
//! - `DIAGNOSTICO_SUBMIT_URL` - endpoint (default `http://localhost:3000/api/submit`)
//! - `DIAGNOSTICO_SUBMIT_TIMEOUT_SECS` - request timeout (default 30)
//! - `DIAGNOSTICO_SUBMIT_RETRIES` - extra attempts for retryable failures (default 0)
//! - `DIAGNOSTICO_SUBMIT_RETRY_DELAY_MS` - first backoff delay (default 500)

mod client;
mod config;

pub use client::HttpGateway;
pub use config::{
    ConfigError, DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
    GatewayConfig,
};
