use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_app_state;
use crate::models::Notice;

/// Renders the notice queue in enqueue order
#[function_component(NoticeStack)]
pub fn notice_stack() -> Html {
    let state = use_app_state();
    let notices = state.notices.snapshot();

    html! {
        <div class="notice-stack" role="status" aria-live="polite">
            {for notices.into_iter().map(|notice| {
                let key = notice.id;
                html! { <NoticeItem key={key} notice={notice} /> }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeItemProps {
    pub notice: Notice,
}

#[function_component(NoticeItem)]
pub fn notice_item(props: &NoticeItemProps) -> Html {
    let state = use_app_state();
    let id = props.notice.id;
    let timeout_ms = props.notice.timeout_ms;

    // Auto-dismiss; dropping the Timeout on unmount cancels it
    {
        let notices = state.notices.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(timeout_ms, move || notices.dismiss(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let notices = state.notices.clone();
        Callback::from(move |_: MouseEvent| notices.dismiss(id))
    };

    let severity = props.notice.severity;
    html! {
        <div class={classes!("notice", severity.css_class())}>
            <span class="notice-icon">{severity.icon()}</span>
            <span class="notice-message">{props.notice.message.clone()}</span>
            <button type="button" class="notice-close" aria-label="Close" onclick={on_close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::PortalContext;
    use crate::models::Route;
    use crate::state::AppState;

    #[derive(Properties, PartialEq)]
    struct StackHostProps {
        errors: Vec<String>,
        successes: Vec<String>,
    }

    #[function_component(StackHost)]
    fn stack_host(props: &StackHostProps) -> Html {
        let state = use_memo((), |_| {
            let state = AppState::new(Route::Landing);
            for message in &props.successes {
                state.notices.success(message.clone());
            }
            for message in &props.errors {
                state.notices.error(message.clone());
            }
            state
        });
        let context = PortalContext {
            state: (*state).clone(),
            revision: 0,
        };

        html! {
            <ContextProvider<PortalContext> context={context}>
                <NoticeStack />
            </ContextProvider<PortalContext>>
        }
    }

    #[tokio::test]
    async fn renders_every_queued_notice_in_order() {
        let rendered = yew::ServerRenderer::<StackHost>::with_props(|| StackHostProps {
            successes: vec!["Login Successful".to_string()],
            errors: vec!["Invalid pass key. Please try again.".to_string()],
        })
        .hydratable(false)
        .render()
        .await;

        let success_at = rendered.find("Login Successful").unwrap();
        let error_at = rendered.find("Invalid pass key. Please try again.").unwrap();
        assert!(success_at < error_at);
        assert!(rendered.contains("notice--success"));
        assert!(rendered.contains("notice--error"));
        assert_eq!(rendered.matches("notice-close").count(), 2);
    }
}
