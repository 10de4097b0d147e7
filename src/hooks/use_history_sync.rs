// ============================================================================
// HISTORY SYNC - Keep the address bar and the router in step
// ============================================================================
// Only the path is pushed. Session context never goes into the URL or into
// the History API state object.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::state::RouterState;

pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

fn push_path(path: &str) {
    let Some(win) = window() else {
        return;
    };
    if current_path().as_deref() == Some(path) {
        return;
    }
    match win.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::error!("❌ [ROUTER] pushState failed: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [ROUTER] History API unavailable: {:?}", e),
    }
}

#[hook]
pub fn use_history_sync(router: RouterState) {
    // Router -> address bar
    {
        let route = router.current();
        use_effect_with(route, move |route| {
            push_path(route.path());
            || ()
        });
    }

    // Address bar -> router (back/forward)
    {
        use_effect_with((), move |_| {
            let listener = window().and_then(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(path) = current_path() {
                        router.sync_from_path(&path);
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);

                match win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                    Ok(()) => Some((win, closure)),
                    Err(e) => {
                        log::error!("❌ [ROUTER] Could not listen to popstate: {:?}", e);
                        None
                    }
                }
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }
}
