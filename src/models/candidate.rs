use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

/// Pass key typed by the candidate, already trimmed and known to be non-blank
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PassKey(String);

impl PassKey {
    /// Trims surrounding whitespace and rejects blank input.
    /// No other format check happens client-side.
    pub fn parse(raw_input: &str) -> Result<Self, AuthError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(AuthError::Validation("empty pass key".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CandidateLoginRequest {
    pub pass_key: String,
}

impl CandidateLoginRequest {
    pub fn new(pass_key: &PassKey) -> Self {
        Self {
            pass_key: pass_key.as_str().to_string(),
        }
    }
}

/// Body of a 2xx login response as it comes off the wire.
/// Every field is optional here; `CandidateLoginResult::try_from` decides
/// whether the response honours the contract.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CandidateLoginResponse {
    #[serde(default)]
    pub candidate_id: Option<i64>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub interview_id: Option<i64>,
    #[serde(default)]
    pub interview_title: Option<String>,
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated login result
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct CandidateLoginResult {
    pub candidate_id: i64,
    pub candidate_name: String,
    pub interview_id: i64,
    pub interview_title: String,
    pub session_id: Option<i64>,
    pub message: String,
}

impl TryFrom<CandidateLoginResponse> for CandidateLoginResult {
    type Error = AuthError;

    fn try_from(response: CandidateLoginResponse) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        if response.candidate_id.is_none() {
            missing.push("candidate_id");
        }
        if response.candidate_name.is_none() {
            missing.push("candidate_name");
        }
        if response.interview_id.is_none() {
            missing.push("interview_id");
        }
        if response.interview_title.is_none() {
            missing.push("interview_title");
        }
        if response.message.is_none() {
            missing.push("message");
        }

        match response {
            CandidateLoginResponse {
                candidate_id: Some(candidate_id),
                candidate_name: Some(candidate_name),
                interview_id: Some(interview_id),
                interview_title: Some(interview_title),
                session_id,
                message: Some(message),
            } => Ok(Self {
                candidate_id,
                candidate_name,
                interview_id,
                interview_title,
                session_id,
                message,
            }),
            _ => Err(AuthError::ContractViolation(format!(
                "login response missing {}",
                missing.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah_davis() -> CandidateLoginResponse {
        serde_json::from_str(
            r#"{
                "candidate_id": 42,
                "candidate_name": "Sarah Davis",
                "interview_id": 7,
                "interview_title": "Warehouse Supervisor",
                "session_id": null,
                "message": "Login Successful"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let padded = PassKey::parse("  KEY123  ").unwrap();
        let plain = PassKey::parse("KEY123").unwrap();
        assert_eq!(padded, plain);
        assert_eq!(padded.as_str(), "KEY123");
        assert_eq!(CandidateLoginRequest::new(&padded), CandidateLoginRequest::new(&plain));
    }

    #[test]
    fn parse_rejects_blank_input() {
        for raw in ["", " ", "\t", "\n  \r\n", "   \t  "] {
            assert_eq!(
                PassKey::parse(raw),
                Err(AuthError::Validation("empty pass key".to_string())),
                "input {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        assert_eq!(PassKey::parse(" AB CD ").unwrap().as_str(), "AB CD");
    }

    #[test]
    fn request_serializes_pass_key_field() {
        let request = CandidateLoginRequest::new(&PassKey::parse("XZDUN3VB").unwrap());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "pass_key": "XZDUN3VB" })
        );
    }

    #[test]
    fn complete_response_converts() {
        let result = CandidateLoginResult::try_from(sarah_davis()).unwrap();
        assert_eq!(result.candidate_id, 42);
        assert_eq!(result.candidate_name, "Sarah Davis");
        assert_eq!(result.interview_id, 7);
        assert_eq!(result.interview_title, "Warehouse Supervisor");
        assert_eq!(result.session_id, None);
        assert_eq!(result.message, "Login Successful");
    }

    #[test]
    fn existing_session_id_is_kept() {
        let mut response = sarah_davis();
        response.session_id = Some(15);
        let result = CandidateLoginResult::try_from(response).unwrap();
        assert_eq!(result.session_id, Some(15));
    }

    #[test]
    fn missing_required_fields_are_a_contract_violation() {
        let mut response = sarah_davis();
        response.candidate_id = None;
        response.interview_title = None;

        let err = CandidateLoginResult::try_from(response).unwrap_err();
        assert_eq!(
            err,
            AuthError::ContractViolation(
                "login response missing candidate_id, interview_title".to_string()
            )
        );
    }

    #[test]
    fn empty_body_lists_every_required_field() {
        let response: CandidateLoginResponse = serde_json::from_str("{}").unwrap();
        let err = CandidateLoginResult::try_from(response).unwrap_err();
        assert!(matches!(err, AuthError::ContractViolation(ref detail)
            if detail.contains("candidate_id")
                && detail.contains("candidate_name")
                && detail.contains("interview_id")
                && detail.contains("interview_title")
                && detail.contains("message")));
    }
}
