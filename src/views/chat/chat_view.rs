use yew::prelude::*;

use crate::hooks::use_app_state;
use crate::viewmodels::{ChatAdmission, ChatGuard, ChatViewModel};
use crate::views::shared::Header;

/// Interview chat surface. Checks its entry on mount and renders nothing
/// unless it was reached through a hand-off.
#[function_component(ChatView)]
pub fn chat_view() -> Html {
    let state = use_app_state();
    let admission = {
        let state = state.clone();
        use_state(move || ChatGuard::admit(&state))
    };

    {
        let state = state.clone();
        let rejected = *admission == ChatAdmission::Rejected;
        use_effect_with((), move |_| {
            if rejected {
                ChatGuard::reject(&state);
            }
            || ()
        });
    }

    match &*admission {
        ChatAdmission::Rejected => html! {},
        ChatAdmission::Admitted(context) => {
            let vm = ChatViewModel::new(context.clone(), state);
            html! { <ChatShell vm={vm} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatShellProps {
    pub vm: ChatViewModel,
}

#[function_component(ChatShell)]
pub fn chat_shell(props: &ChatShellProps) -> Html {
    let context = props.vm.context();

    let on_leave = {
        let vm = props.vm.clone();
        Callback::from(move |_: MouseEvent| vm.leave())
    };

    html! {
        <div class="chat-screen">
            <Header title={context.interview_title.clone()} subtitle={Some(props.vm.greeting())} />
            <div class={classes!("session-banner", props.vm.is_resuming().then_some("session-banner--resume"))}>
                {props.vm.session_banner()}
            </div>
            <div class="chat-transcript" data-interview-id={context.interview_id.to_string()}></div>
            <div class="chat-footer">
                <button type="button" class="btn-link" onclick={on_leave}>{"Leave interview"}</button>
            </div>
        </div>
    }
}
