//! Test doubles shared by the view-model tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::errors::AuthError;
use crate::models::{CandidateLoginRequest, CandidateLoginResponse};
use crate::services::CandidateAuthService;

type LoginReply = Result<CandidateLoginResponse, AuthError>;

enum ScriptedReply {
    Ready(LoginReply),
    Deferred(oneshot::Receiver<LoginReply>),
}

/// In-memory auth service: replays scripted replies in order and records
/// every request it receives.
#[derive(Default)]
pub struct MockAuthService {
    requests: RefCell<Vec<CandidateLoginRequest>>,
    replies: RefCell<VecDeque<ScriptedReply>>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(&self, reply: LoginReply) -> &Self {
        self.replies.borrow_mut().push_back(ScriptedReply::Ready(reply));
        self
    }

    /// Queues a reply that only resolves once the returned sender fires
    pub fn reply_later(&self) -> oneshot::Sender<LoginReply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(ScriptedReply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<CandidateLoginRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl CandidateAuthService for MockAuthService {
    async fn login(&self, request: &CandidateLoginRequest) -> LoginReply {
        self.requests.borrow_mut().push(request.clone());
        let scripted = self.replies.borrow_mut().pop_front();
        match scripted {
            Some(ScriptedReply::Ready(reply)) => reply,
            Some(ScriptedReply::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(AuthError::Transport("reply dropped".to_string()))),
            None => Err(AuthError::Transport("no scripted reply".to_string())),
        }
    }
}

/// Login response for the "XZDUN3VB" fixture candidate
pub fn sarah_davis_response() -> CandidateLoginResponse {
    CandidateLoginResponse {
        candidate_id: Some(42),
        candidate_name: Some("Sarah Davis".to_string()),
        interview_id: Some(7),
        interview_title: Some("Warehouse Supervisor".to_string()),
        session_id: None,
        message: Some("Login Successful".to_string()),
    }
}
