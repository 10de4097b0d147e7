// ============================================================================
// REACTIVITY - Shared value + subscriber notification
// ============================================================================

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

pub type SubscriptionId = u64;

struct Subscribers {
    next_id: Cell<SubscriptionId>,
    callbacks: RefCell<Vec<(SubscriptionId, Callback)>>,
}

/// Reactive value. Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<Subscribers>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(Subscribers {
                next_id: Cell::new(0),
                callbacks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Borrow the current value
    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutate in place and notify subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = self.subscribers.next_id.get();
        self.subscribers.next_id.set(id + 1);
        self.subscribers
            .callbacks
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .callbacks
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.callbacks.borrow().len()
    }

    fn notify(&self) {
        // Snapshot first: a callback may subscribe or unsubscribe
        let callbacks: Vec<Callback> = self
            .subscribers
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> PartialEq for ReactiveState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        state.subscribe(move || counter.set(counter.get() + 1));
        let counter = hits.clone();
        state.subscribe(move || counter.set(counter.get() + 10));

        state.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::from("a"));
        let clone = state.clone();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        state.subscribe(move || counter.set(counter.get() + 1));

        clone.update(|v| v.push('b'));
        assert_eq!(state.get(), "ab");
        assert_eq!(hits.get(), 1);
        assert!(state == clone);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = state.subscribe(move || counter.set(counter.get() + 1));

        state.unsubscribe(id);
        state.set(1);
        assert_eq!(hits.get(), 0);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_read_during_notification() {
        let state = ReactiveState::new(1);
        let seen = Rc::new(Cell::new(0));
        let reader = state.clone();
        let sink = seen.clone();
        state.subscribe(move || sink.set(*reader.borrow()));

        state.set(9);
        assert_eq!(seen.get(), 9);
    }
}
