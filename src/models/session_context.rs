use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::CandidateLoginResult;

/// Identity handed from the landing page to the interview chat
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSessionContext {
    pub candidate_id: i64,
    pub candidate_name: String,
    pub interview_id: i64,
    pub interview_title: String,
    pub session_id: Option<i64>,
}

impl From<&CandidateLoginResult> for NavigationSessionContext {
    fn from(result: &CandidateLoginResult) -> Self {
        Self {
            candidate_id: result.candidate_id,
            candidate_name: result.candidate_name.clone(),
            interview_id: result.interview_id,
            interview_title: result.interview_title.clone(),
            session_id: result.session_id,
        }
    }
}

/// Single-use carrier for a `NavigationSessionContext`.
///
/// Lives only in router memory; it is never written to the URL or to
/// browser storage, so a full reload loses it.
#[derive(Clone, PartialEq, Debug)]
pub struct HandoffToken {
    id: Uuid,
    context: NavigationSessionContext,
}

impl HandoffToken {
    pub fn new(context: NavigationSessionContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            context,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn context(&self) -> &NavigationSessionContext {
        &self.context
    }

    /// Consumes the token
    pub fn into_context(self) -> NavigationSessionContext {
        self.context
    }
}
