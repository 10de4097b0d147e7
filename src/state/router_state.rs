// ============================================================================
// ROUTER STATE - Current route + in-memory hand-off slot
// ============================================================================
// The hand-off slot is the only channel from the landing page to the chat
// surface. It is cleared by every navigation that does not carry a token and
// emptied by the first reader, so a token is consumed at most once.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{HandoffToken, Route};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone, PartialEq)]
pub struct RouterState {
    route: ReactiveState<Route>,
    handoff: Rc<RefCell<Option<HandoffToken>>>,
    navigations: Rc<Cell<u32>>,
    generation: Rc<Cell<u64>>,
}

impl RouterState {
    pub fn new(initial: Route) -> Self {
        Self {
            route: ReactiveState::new(initial),
            handoff: Rc::new(RefCell::new(None)),
            navigations: Rc::new(Cell::new(0)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn current(&self) -> Route {
        self.route.get()
    }

    /// Plain navigation. Drops any pending hand-off token.
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 [ROUTER] {:?} -> {:?}", self.current(), route);
        self.handoff.borrow_mut().take();
        self.navigations.set(self.navigations.get() + 1);
        self.bump_generation();
        self.route.set(route);
    }

    /// Navigates to the chat surface carrying a hand-off token
    pub fn navigate_with_handoff(&self, token: HandoffToken) {
        log::info!(
            "🧭 [ROUTER] {:?} -> {:?} (hand-off {})",
            self.current(),
            Route::InterviewChat,
            token.id()
        );
        *self.handoff.borrow_mut() = Some(token);
        self.navigations.set(self.navigations.get() + 1);
        self.bump_generation();
        self.route.set(Route::InterviewChat);
    }

    /// Browser back/forward. The URL already changed, so nothing is pushed
    /// and no token survives.
    pub fn sync_from_path(&self, path: &str) {
        let route = Route::from_path(path);
        log::info!("🧭 [ROUTER] popstate {} -> {:?}", path, route);
        self.handoff.borrow_mut().take();
        self.bump_generation();
        if route != self.current() {
            self.route.set(route);
        }
    }

    /// Takes the pending hand-off token, leaving the slot empty
    pub fn take_handoff(&self) -> Option<HandoffToken> {
        self.handoff.borrow_mut().take()
    }

    pub fn has_pending_handoff(&self) -> bool {
        self.handoff.borrow().is_some()
    }

    /// App-initiated navigations since start-up
    pub fn navigation_count(&self) -> u32 {
        self.navigations.get()
    }

    /// Bumped by every route change, app- or browser-driven. Two equal
    /// readings mean the user never left the page in between, even if they
    /// came back to the same route.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn bump_generation(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.route.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.route.unsubscribe(id);
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}
