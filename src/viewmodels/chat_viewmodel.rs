// ============================================================================
// CHAT VIEWMODEL - Shell around an admitted interview session
// ============================================================================
// The conversation itself is served elsewhere; this only owns what the
// hand-off delivered and the way back out.
// ============================================================================

use crate::models::{NavigationSessionContext, Route};
use crate::state::AppState;

#[derive(Clone, PartialEq)]
pub struct ChatViewModel {
    context: NavigationSessionContext,
    state: AppState,
}

impl ChatViewModel {
    pub fn new(context: NavigationSessionContext, state: AppState) -> Self {
        Self { context, state }
    }

    pub fn context(&self) -> &NavigationSessionContext {
        &self.context
    }

    pub fn is_resuming(&self) -> bool {
        self.context.session_id.is_some()
    }

    pub fn session_banner(&self) -> String {
        match self.context.session_id {
            Some(id) => format!("Resuming session #{}", id),
            None => "Starting a new session".to_string(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.context.candidate_name)
    }

    /// Back to the landing page. The context is dropped with this view model.
    pub fn leave(&self) {
        log::info!(
            "🚪 [CHAT] Candidate {} left interview {}",
            self.context.candidate_id,
            self.context.interview_id
        );
        self.state.router.navigate(Route::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(session_id: Option<i64>) -> NavigationSessionContext {
        NavigationSessionContext {
            candidate_id: 42,
            candidate_name: "Sarah Davis".to_string(),
            interview_id: 7,
            interview_title: "Warehouse Supervisor".to_string(),
            session_id,
        }
    }

    #[test]
    fn banner_reflects_existing_session() {
        let state = AppState::default();
        let fresh = ChatViewModel::new(context(None), state.clone());
        let resumed = ChatViewModel::new(context(Some(15)), state);

        assert!(!fresh.is_resuming());
        assert_eq!(fresh.session_banner(), "Starting a new session");
        assert!(resumed.is_resuming());
        assert_eq!(resumed.session_banner(), "Resuming session #15");
        assert_eq!(fresh.greeting(), "Welcome, Sarah Davis");
    }

    #[test]
    fn leave_returns_to_landing_without_a_token() {
        let state = AppState::new(Route::InterviewChat);
        let vm = ChatViewModel::new(context(None), state.clone());

        vm.leave();
        assert_eq!(state.router.current(), Route::Landing);
        assert!(!state.router.has_pending_handoff());
    }
}
