// ============================================================================
// APP STATE - Root-scoped state shared through the Yew context
// ============================================================================

use crate::models::Route;
use crate::state::{NoticeQueue, ReactiveState, RouterState, SubscriptionId};

#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    pub router: RouterState,
    pub notices: NoticeQueue,
    /// Set while a candidate login request is outstanding. Lives here rather
    /// than on the landing view model so a remounted landing page still sees
    /// the request it did not start.
    pub login_in_flight: ReactiveState<bool>,
}

impl AppState {
    pub fn new(initial_route: Route) -> Self {
        Self {
            router: RouterState::new(initial_route),
            notices: NoticeQueue::new(),
            login_in_flight: ReactiveState::new(false),
        }
    }

    /// Registers one callback on every reactive part of the state.
    /// Returns a guard that unsubscribes when dropped.
    pub fn subscribe_to_changes<F>(&self, callback: F) -> AppSubscription
    where
        F: Fn() + Clone + 'static,
    {
        AppSubscription {
            state: self.clone(),
            router_id: self.router.subscribe(callback.clone()),
            notices_id: self.notices.subscribe(callback.clone()),
            in_flight_id: self.login_in_flight.subscribe(callback),
        }
    }
}

pub struct AppSubscription {
    state: AppState,
    router_id: SubscriptionId,
    notices_id: SubscriptionId,
    in_flight_id: SubscriptionId,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        self.state.router.unsubscribe(self.router_id);
        self.state.notices.unsubscribe(self.notices_id);
        self.state.login_in_flight.unsubscribe(self.in_flight_id);
    }
}
