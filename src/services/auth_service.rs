use async_trait::async_trait;

use crate::errors::AuthError;
use crate::models::{CandidateLoginRequest, CandidateLoginResponse};
use crate::services::api_client::ApiClient;

/// Remote procedure that turns a pass key into candidate/interview identity.
///
/// Implementations return the raw response; deciding whether it honours the
/// contract is the hand-off's job.
#[async_trait(?Send)]
pub trait CandidateAuthService {
    async fn login(
        &self,
        request: &CandidateLoginRequest,
    ) -> Result<CandidateLoginResponse, AuthError>;
}

/// Candidate auth over HTTP
#[derive(Clone)]
pub struct HttpCandidateAuthService {
    client: ApiClient,
}

impl HttpCandidateAuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl CandidateAuthService for HttpCandidateAuthService {
    async fn login(
        &self,
        request: &CandidateLoginRequest,
    ) -> Result<CandidateLoginResponse, AuthError> {
        self.client.candidate_login(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_service_posts_through_the_given_client() {
        let service = HttpCandidateAuthService::new(ApiClient::with_base_url("http://api.test"));
        assert_eq!(
            service.client.candidate_login_url(),
            "http://api.test/api/candidates/login"
        );
    }
}
