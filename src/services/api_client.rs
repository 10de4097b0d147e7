// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No UI logic here: requests go out, responses or classified errors come back.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::errors::AuthError;
use crate::models::{CandidateLoginRequest, CandidateLoginResponse};
use crate::utils::constants::CANDIDATE_LOGIN_PATH;
use crate::utils::mask_pass_key;

/// Error body shapes the backend uses for rejected requests
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn candidate_login_url(&self) -> String {
        format!("{}{}", self.base_url, CANDIDATE_LOGIN_PATH)
    }

    /// POST the pass key. One request, no retry.
    pub async fn candidate_login(
        &self,
        request: &CandidateLoginRequest,
    ) -> Result<CandidateLoginResponse, AuthError> {
        let url = self.candidate_login_url();
        log::info!("🔐 [AUTH] Candidate login with pass key {}", mask_pass_key(&request.pass_key));

        let response = Request::post(&url).json(request)?.send().await?;
        read_login_response(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_login_response(response: Response) -> Result<CandidateLoginResponse, AuthError> {
    let status = response.status();
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        log::warn!("⚠️ [AUTH] Login rejected with HTTP {}", status);
        return Err(classify_rejection(status, &body));
    }

    serde_json::from_str::<CandidateLoginResponse>(&body)
        .map_err(|e| AuthError::Transport(format!("unreadable login response: {}", e)))
}

/// Maps a non-2xx status and its body onto the error taxonomy
pub fn classify_rejection(status: u16, body: &str) -> AuthError {
    match status {
        400 | 401 | 403 | 404 | 422 => AuthError::Authentication {
            message: server_message(body),
        },
        _ => AuthError::Transport(format!("HTTP {}", status)),
    }
}

/// Pulls a human-readable message out of an error body, if there is one.
/// Structured `detail` values (validation error lists) are not shown.
fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    };

    detail
        .or(parsed.message)
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_base_and_path() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(
            client.candidate_login_url(),
            "https://api.example.com/api/candidates/login"
        );
    }

    #[test]
    fn rejected_key_without_body_uses_fallback() {
        let err = classify_rejection(401, "");
        assert_eq!(err, AuthError::Authentication { message: None });
        assert_eq!(err.user_message(), "Invalid pass key. Please try again.");
    }

    #[test]
    fn rejected_key_surfaces_server_detail() {
        let err = classify_rejection(404, r#"{"detail": "Pass key not found"}"#);
        assert_eq!(
            err,
            AuthError::Authentication {
                message: Some("Pass key not found".to_string())
            }
        );
    }

    #[test]
    fn message_and_error_fields_are_accepted() {
        assert_eq!(
            classify_rejection(403, r#"{"message": "Interview closed"}"#),
            AuthError::Authentication {
                message: Some("Interview closed".to_string())
            }
        );
        assert_eq!(
            classify_rejection(400, r#"{"error": "Pass key expired"}"#),
            AuthError::Authentication {
                message: Some("Pass key expired".to_string())
            }
        );
    }

    #[test]
    fn structured_detail_is_not_shown() {
        let err = classify_rejection(422, r#"{"detail": [{"loc": ["body", "pass_key"]}]}"#);
        assert_eq!(err, AuthError::Authentication { message: None });
    }

    #[test]
    fn server_errors_are_transport_failures() {
        for status in [500, 502, 503, 429] {
            assert!(matches!(
                classify_rejection(status, r#"{"detail": "boom"}"#),
                AuthError::Transport(_)
            ));
        }
    }
}
