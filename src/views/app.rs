// ============================================================================
// APP - Root component: state provider, route switch, notice stack
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_app_state, AppStateProvider};
use crate::models::Route;
use crate::views::chat::ChatView;
use crate::views::landing::{LandingView, OperatorLoginView};
use crate::views::shared::NoticeStack;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppStateProvider>
            <RouteSwitch />
            <NoticeStack />
        </AppStateProvider>
    }
}

#[function_component(RouteSwitch)]
fn route_switch() -> Html {
    let state = use_app_state();
    // Keyed on the navigation count so every navigation is a fresh mount
    let mount_key = state.router.navigation_count().to_string();

    match state.router.current() {
        Route::Landing => html! { <LandingView key={mount_key} /> },
        Route::OperatorLogin => html! { <OperatorLoginView key={mount_key} /> },
        Route::InterviewChat => html! { <ChatView key={mount_key} /> },
    }
}
