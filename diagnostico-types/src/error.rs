/// Message shown when a submission fails without a usable explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "No se logró enviar. Intenta de nuevo.";

/// Error type for submission gateways.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The endpoint answered but refused the submission, either with a
    /// non-success status or with an explicit failure flag in the body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (connection, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The payload could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl GatewayError {
    /// Create a rejection, deriving the message from the status when the
    /// endpoint did not supply one.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Error {status}"));
        Self::Rejected { status, message }
    }

    /// Create a transport error from any error type.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// The text to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(_) | Self::Encoding(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Check if sending the same payload again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Rejected { status, .. } => *status >= 500,
            Self::Transport(_) => true,
            Self::Encoding(_) => false,
        }
    }
}
