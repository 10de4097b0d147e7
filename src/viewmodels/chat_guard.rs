// ============================================================================
// CHAT GUARD - Mount-time check on the interview chat surface
// ============================================================================
// The hand-off token is the only accepted proof of entry. Without it the
// surface renders nothing and sends the candidate back to the landing page.
// ============================================================================

use crate::models::{NavigationSessionContext, Route};
use crate::state::AppState;
use crate::utils::constants::MSG_NO_INTERVIEW_SESSION;

#[derive(Clone, PartialEq, Debug)]
pub enum ChatAdmission {
    Admitted(NavigationSessionContext),
    Rejected,
}

impl ChatAdmission {
    pub fn context(&self) -> Option<&NavigationSessionContext> {
        match self {
            ChatAdmission::Admitted(context) => Some(context),
            ChatAdmission::Rejected => None,
        }
    }
}

pub struct ChatGuard;

impl ChatGuard {
    /// Consumes the pending token, if any. No side effects besides the take.
    pub fn admit(state: &AppState) -> ChatAdmission {
        match state.router.take_handoff() {
            Some(token) => {
                log::info!("🚪 [CHAT] Admitted with hand-off {}", token.id());
                ChatAdmission::Admitted(token.into_context())
            }
            None => {
                log::warn!("🚫 [CHAT] Entered without a hand-off token");
                ChatAdmission::Rejected
            }
        }
    }

    /// Sends the candidate back to the landing page with a notice
    pub fn reject(state: &AppState) {
        state.notices.warning(MSG_NO_INTERVIEW_SESSION);
        state.router.navigate(Route::Landing);
    }

    /// Admit, rejecting on the spot when there is no token
    pub fn enter(state: &AppState) -> ChatAdmission {
        let admission = Self::admit(state);
        if admission == ChatAdmission::Rejected {
            Self::reject(state);
        }
        admission
    }
}
