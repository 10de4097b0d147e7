use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_landing_gate;
use crate::viewmodels::GatePhase;

#[derive(PartialEq, Clone, Copy)]
pub enum EntryPath {
    Candidate,
    Operator,
}

impl EntryPath {
    pub fn display_name(&self) -> &'static str {
        match self {
            EntryPath::Candidate => "Candidate",
            EntryPath::Operator => "Operator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntryPath::Candidate => "Enter the pass key from your invitation to start your interview",
            EntryPath::Operator => "Sign in with your credentials to manage jobs, questions and interviews",
        }
    }
}

#[function_component(LandingView)]
pub fn landing_view() -> Html {
    let gate = use_landing_gate();
    let entry_path = use_state(|| EntryPath::Candidate);

    let select_path = |path: EntryPath| {
        let entry_path = entry_path.clone();
        Callback::from(move |_: MouseEvent| entry_path.set(path))
    };

    let current = *entry_path;
    let is_candidate = current == EntryPath::Candidate;
    let dispatching = gate.in_flight || gate.phase == GatePhase::Dispatching;

    html! {
        <div class="landing-screen">
            <div class="landing-container">
                <div class="landing-header">
                    <div class="landing-logo">
                        <div class="logo-icon">{"🎙️"}</div>
                    </div>
                    <h1>{CONFIG.app_title.clone()}</h1>
                    <p>{"AI-assisted interviews"}</p>
                </div>

                <div class="entry-toggle">
                    <div class="toggle-container">
                        <button
                            type="button"
                            class={classes!("toggle-option", is_candidate.then_some("active"))}
                            onclick={select_path(EntryPath::Candidate)}
                        >
                            {EntryPath::Candidate.display_name()}
                        </button>
                        <button
                            type="button"
                            class={classes!("toggle-option", (!is_candidate).then_some("active"))}
                            onclick={select_path(EntryPath::Operator)}
                        >
                            {EntryPath::Operator.display_name()}
                        </button>
                    </div>
                    <div class="toggle-description">{current.description()}</div>
                </div>

                {if is_candidate {
                    html! {
                        <form class="pass-key-form" onsubmit={gate.on_submit.clone()}>
                            <div class="form-group">
                                <label for="pass-key">{"Pass key"}</label>
                                <input
                                    type="text"
                                    id="pass-key"
                                    name="pass_key"
                                    placeholder="e.g. XZDUN3VB"
                                    autocomplete="off"
                                    value={gate.pass_key.clone()}
                                    oninput={gate.on_input.clone()}
                                    disabled={!gate.form_enabled}
                                />
                            </div>

                            <button type="submit" class="btn-submit" disabled={!gate.form_enabled}>
                                <span class="btn-text">
                                    {if dispatching { "Checking…" } else { "Start interview" }}
                                </span>
                            </button>
                        </form>
                    }
                } else {
                    html! {
                        <div class="operator-entry">
                            <button
                                type="button"
                                class="btn-submit"
                                onclick={gate.on_operator_login.clone()}
                            >
                                {"Continue to operator login"}
                            </button>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
