// ============================================================================
// USE LANDING GATE - Wires LandingViewModel into the landing form
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::session_context::use_app_state;
use crate::services::{ApiClient, HttpCandidateAuthService};
use crate::viewmodels::{GatePhase, LandingViewModel, SubmitOutcome};

pub struct UseLandingGateHandle {
    /// Text field value, owned by the view model
    pub pass_key: String,
    pub phase: GatePhase,
    /// A login request is outstanding, possibly from an earlier mount
    pub in_flight: bool,
    pub form_enabled: bool,
    pub on_input: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_operator_login: Callback<MouseEvent>,
}

#[hook]
pub fn use_landing_gate() -> UseLandingGateHandle {
    let state = use_app_state();
    let in_flight = state.login_in_flight.get();
    let vm = use_memo((), move |_| {
        let service = HttpCandidateAuthService::new(ApiClient::new());
        LandingViewModel::new(Rc::new(service), state)
    });
    let force_update = use_force_update();

    // Re-render on phase and input changes so the form tracks the gate
    {
        let vm = vm.clone();
        use_effect_with((), move |_| {
            let ids = vm.subscribe(move || force_update.force_update());
            move || vm.unsubscribe(ids)
        });
    }

    let on_input = {
        let vm = vm.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            vm.set_input(input.value());
        })
    };

    let on_submit = {
        let vm = vm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !vm.is_form_enabled() {
                return;
            }

            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let SubmitOutcome::ContractViolation(err) = vm.submit().await {
                    // The gate is already Faulted; hand the error to the
                    // browser's global handler
                    log::error!("💥 [LANDING] Malformed login response: {}", err);
                    wasm_bindgen::throw_str(&err.to_string());
                }
            });
        })
    };

    let on_operator_login = {
        let vm = vm.clone();
        Callback::from(move |_: MouseEvent| vm.submit_operator_login())
    };

    UseLandingGateHandle {
        pass_key: vm.input(),
        phase: vm.phase(),
        in_flight,
        form_enabled: vm.is_form_enabled(),
        on_input,
        on_submit,
        on_operator_login,
    }
}
