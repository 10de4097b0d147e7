// ============================================================================
// APP STATE CONTEXT - Share the root AppState with every component
// ============================================================================
// The provider owns the only AppState, subscribes once to every reactive
// part of it and bumps a revision counter so consumers re-render.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_history_sync::{current_path, use_history_sync};
use crate::models::Route;
use crate::state::AppState;

#[derive(Clone, PartialEq)]
pub struct PortalContext {
    pub state: AppState,
    pub revision: u64,
}

#[derive(Default, PartialEq)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Revision(self.0 + 1))
    }
}

#[derive(Properties, PartialEq)]
pub struct AppStateProviderProps {
    pub children: Children,
}

#[function_component(AppStateProvider)]
pub fn app_state_provider(props: &AppStateProviderProps) -> Html {
    let state = use_memo((), |_| {
        let initial = current_path()
            .map(|path| Route::from_path(&path))
            .unwrap_or_default();
        log::info!("🚀 [APP] Initial route {:?}", initial);
        AppState::new(initial)
    });
    let revision = use_reducer(Revision::default);

    {
        let state = (*state).clone();
        let dispatcher = revision.dispatcher();
        use_effect_with((), move |_| {
            let subscription = state.subscribe_to_changes(move || dispatcher.dispatch(()));
            move || drop(subscription)
        });
    }

    use_history_sync(state.router.clone());

    let context = PortalContext {
        state: (*state).clone(),
        revision: revision.0,
    };

    html! {
        <ContextProvider<PortalContext> context={context}>
            {props.children.clone()}
        </ContextProvider<PortalContext>>
    }
}

/// Root state handle. Panics only if used outside `AppStateProvider`,
/// which is a wiring bug.
#[hook]
pub fn use_app_state() -> AppState {
    use_context::<PortalContext>()
        .map(|ctx| ctx.state)
        .expect("use_app_state must be called under AppStateProvider")
}
