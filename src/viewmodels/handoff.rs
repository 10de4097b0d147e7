// ============================================================================
// SESSION HAND-OFF - Login result -> navigation context -> chat route
// ============================================================================

use crate::errors::AuthError;
use crate::models::{
    CandidateLoginResponse, CandidateLoginResult, HandoffToken, NavigationSessionContext,
};
use crate::state::RouterState;

pub struct SessionHandoff;

impl SessionHandoff {
    /// Checks a 2xx response against the login contract.
    /// Never fills in defaults for missing required fields.
    pub fn accept(response: CandidateLoginResponse) -> Result<CandidateLoginResult, AuthError> {
        CandidateLoginResult::try_from(response).map_err(|err| {
            log::error!("💥 [HANDOFF] {}", err);
            err
        })
    }

    /// Builds the context and performs the single forward navigation
    pub fn perform(result: &CandidateLoginResult, router: &RouterState) -> NavigationSessionContext {
        let context = NavigationSessionContext::from(result);
        log::info!(
            "🤝 [HANDOFF] candidate {} -> interview {} (session {:?})",
            context.candidate_id,
            context.interview_id,
            context.session_id
        );
        router.navigate_with_handoff(HandoffToken::new(context.clone()));
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use crate::testing::sarah_davis_response;

    #[test]
    fn perform_navigates_once_with_mapped_context() {
        let router = RouterState::default();
        let result = SessionHandoff::accept(sarah_davis_response()).unwrap();

        let context = SessionHandoff::perform(&result, &router);

        assert_eq!(router.current(), Route::InterviewChat);
        assert_eq!(router.navigation_count(), 1);
        let token = router.take_handoff().unwrap();
        assert_eq!(token.context(), &context);
        assert_eq!(context.candidate_id, result.candidate_id);
        assert_eq!(context.candidate_name, result.candidate_name);
        assert_eq!(context.interview_id, result.interview_id);
        assert_eq!(context.interview_title, result.interview_title);
        assert_eq!(context.session_id, result.session_id);
    }

    #[test]
    fn malformed_response_is_refused() {
        let mut response = sarah_davis_response();
        response.candidate_name = None;

        let err = SessionHandoff::accept(response).unwrap_err();
        assert!(matches!(err, AuthError::ContractViolation(_)));
    }
}
