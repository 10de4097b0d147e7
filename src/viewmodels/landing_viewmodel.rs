// ============================================================================
// LANDING VIEWMODEL - Pass-key gate
// ============================================================================
// Idle -> Validating -> Idle                      (blank input, nothing sent)
//                    -> Dispatching -> Idle       (failure, error notice)
//                                   -> HandedOff  (success, terminal)
//                                   -> Faulted    (malformed success, terminal)
// ============================================================================

use std::rc::Rc;

use crate::errors::AuthError;
use crate::models::{CandidateLoginRequest, NavigationSessionContext, PassKey, Route};
use crate::services::CandidateAuthService;
use crate::state::{AppState, ReactiveState, SubscriptionId};
use crate::utils::mask_pass_key;
use crate::viewmodels::handoff::SessionHandoff;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GatePhase {
    Idle,
    Validating,
    Dispatching,
    HandedOff,
    /// The server broke the login contract; the gate stays locked
    Faulted,
}

/// What a single submit attempt ended with
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// A request is already in flight or the gate is terminal
    Rejected,
    /// Blank input; nothing was sent
    Invalid(AuthError),
    /// Remote failure, form re-enabled
    Failed(AuthError),
    /// The landing page was left before the call resolved
    Abandoned,
    /// 2xx response missing required fields. Not recoverable.
    ContractViolation(AuthError),
    HandedOff(NavigationSessionContext),
}

pub struct LandingViewModel<S: CandidateAuthService> {
    service: Rc<S>,
    state: AppState,
    phase: ReactiveState<GatePhase>,
    input: ReactiveState<String>,
}

impl<S: CandidateAuthService> Clone for LandingViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            state: self.state.clone(),
            phase: self.phase.clone(),
            input: self.input.clone(),
        }
    }
}

impl<S: CandidateAuthService> LandingViewModel<S> {
    pub fn new(service: Rc<S>, state: AppState) -> Self {
        Self {
            service,
            state,
            phase: ReactiveState::new(GatePhase::Idle),
            input: ReactiveState::new(String::new()),
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase.get()
    }

    /// Current text of the pass-key field. Only the user changes it.
    pub fn input(&self) -> String {
        self.input.get()
    }

    pub fn set_input(&self, value: impl Into<String>) {
        self.input.set(value.into());
    }

    /// Input and submit control are disabled while a login request is
    /// outstanding, including one started by an earlier mount of the page.
    pub fn is_form_enabled(&self) -> bool {
        matches!(self.phase(), GatePhase::Idle | GatePhase::Validating)
            && !self.state.login_in_flight.get()
    }

    /// Notified on phase and input changes
    pub fn subscribe<F>(&self, callback: F) -> (SubscriptionId, SubscriptionId)
    where
        F: Fn() + Clone + 'static,
    {
        (
            self.phase.subscribe(callback.clone()),
            self.input.subscribe(callback),
        )
    }

    pub fn unsubscribe(&self, (phase_id, input_id): (SubscriptionId, SubscriptionId)) {
        self.phase.unsubscribe(phase_id);
        self.input.unsubscribe(input_id);
    }

    /// Submits whatever is in the field
    pub async fn submit(&self) -> SubmitOutcome {
        let raw = self.input();
        self.submit_pass_key(&raw).await
    }

    /// Runs one submit attempt to completion. The field is never cleared.
    pub async fn submit_pass_key(&self, raw_input: &str) -> SubmitOutcome {
        if !self.is_form_enabled() {
            log::warn!(
                "⏳ [LANDING] Submit ignored, gate is {:?} (in flight: {})",
                self.phase(),
                self.state.login_in_flight.get()
            );
            return SubmitOutcome::Rejected;
        }

        self.phase.set(GatePhase::Validating);
        let pass_key = match PassKey::parse(raw_input) {
            Ok(pass_key) => pass_key,
            Err(err) => {
                log::info!("✋ [LANDING] Blank pass key, nothing sent");
                self.state.notices.warning(err.user_message());
                self.phase.set(GatePhase::Idle);
                return SubmitOutcome::Invalid(err);
            }
        };

        let generation = self.state.router.generation();
        self.state.login_in_flight.set(true);
        self.phase.set(GatePhase::Dispatching);
        log::info!("📨 [LANDING] Dispatching pass key {}", mask_pass_key(pass_key.as_str()));
        let request = CandidateLoginRequest::new(&pass_key);
        let reply = self.service.login(&request).await;
        self.state.login_in_flight.set(false);

        // Any route change in between, even a round trip back to the landing
        // page, means this page is no longer the one that asked
        if self.state.router.generation() != generation {
            log::info!("👋 [LANDING] Left the landing page before login resolved, dropping result");
            self.phase.set(GatePhase::Idle);
            return SubmitOutcome::Abandoned;
        }

        let response = match reply {
            Ok(response) => response,
            Err(err) => {
                log::warn!("❌ [LANDING] Login failed: {}", err);
                self.state.notices.error(err.user_message());
                self.phase.set(GatePhase::Idle);
                return SubmitOutcome::Failed(err);
            }
        };

        let result = match SessionHandoff::accept(response) {
            Ok(result) => result,
            Err(err) => {
                self.phase.set(GatePhase::Faulted);
                return SubmitOutcome::ContractViolation(err);
            }
        };

        // Notice first, then the single navigation
        self.state.notices.success(result.message.clone());
        let context = SessionHandoff::perform(&result, &self.state.router);
        self.phase.set(GatePhase::HandedOff);
        SubmitOutcome::HandedOff(context)
    }

    /// Shortcut to the operator login surface. No request, no validation.
    pub fn submit_operator_login(&self) {
        log::info!("🧑‍💼 [LANDING] Operator login requested");
        self.state.router.navigate(Route::OperatorLogin);
    }
}
