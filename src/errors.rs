//! Error taxonomy for the candidate login flow.

use thiserror::Error;

use crate::utils::constants::{MSG_INVALID_PASS_KEY, MSG_SERVICE_UNAVAILABLE};

/// Errors raised between the landing page and the session hand-off
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Rejected locally before any request is sent
    #[error("validation error: {0}")]
    Validation(String),

    /// The backend refused the pass key (unknown, expired, already used)
    #[error("authentication rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Authentication { message: Option<String> },

    /// Network failure, server error or an unreadable body
    #[error("transport error: {0}")]
    Transport(String),

    /// A success response that lacks required fields
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

impl AuthError {
    /// Text shown to the candidate in the notice stack
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(_) => "Please enter your pass key.".to_string(),
            AuthError::Authentication { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(MSG_INVALID_PASS_KEY)
                .to_string(),
            AuthError::Transport(_) => MSG_SERVICE_UNAVAILABLE.to_string(),
            AuthError::ContractViolation(_) => {
                "Unexpected response from the interview service.".to_string()
            }
        }
    }

    /// Whether the landing page can recover by re-enabling the form
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AuthError::ContractViolation(_))
    }
}

impl From<gloo_net::Error> for AuthError {
    fn from(err: gloo_net::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
