use yew::prelude::*;

use crate::hooks::use_app_state;
use crate::models::Route;

/// Entry point for operators. The credential flow is served by the
/// operator console; this page only hosts the way in and the way back.
#[function_component(OperatorLoginView)]
pub fn operator_login_view() -> Html {
    let state = use_app_state();

    let on_back = Callback::from(move |_: MouseEvent| state.router.navigate(Route::Landing));

    html! {
        <div class="landing-screen">
            <div class="landing-container">
                <div class="landing-header">
                    <h1>{"Operator sign-in"}</h1>
                    <p>{"Use your operator account to manage interviews"}</p>
                </div>
                <button type="button" class="btn-link" onclick={on_back}>
                    {"← Back to candidate entry"}
                </button>
            </div>
        </div>
    }
}
