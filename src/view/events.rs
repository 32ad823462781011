//! One-shot change notifications for view properties.
//!
//! A map view's initial center and resolution may be determined
//! asynchronously, after the controls observing it were constructed. The
//! controls bridge that gap with subscribe-once semantics: register a
//! handler, fire it on the next change, deregister it automatically. The
//! handle returned at registration allows cancelling a subscription that has
//! not fired yet.

/// Handle identifying a pending one-shot subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A signal whose subscribers each observe at most one emission.
///
/// Emitting drains all pending handlers; handlers registered afterwards wait
/// for the next emission. Handlers run on the emitting call stack (the view
/// model is strictly single-threaded), so they must not re-enter the view's
/// mutable borrow; they receive the new value directly instead.
pub struct OnceSignal<T> {
    next_id: u64,
    waiters: Vec<(SubscriptionId, Box<dyn FnOnce(T)>)>,
}

impl<T> Default for OnceSignal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            waiters: Vec::new(),
        }
    }
}

impl<T: Clone> OnceSignal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for the next emission only.
    pub fn subscribe_once(&mut self, handler: impl FnOnce(T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.waiters.push((id, Box::new(handler)));
        id
    }

    /// Cancels a pending subscription. Returns `false` if it already fired
    /// or was cancelled before.
    pub fn cancel(&mut self, id: SubscriptionId) -> bool {
        let before = self.waiters.len();
        self.waiters.retain(|(waiter_id, _)| *waiter_id != id);
        self.waiters.len() != before
    }

    /// Fires and deregisters every pending handler.
    pub fn emit(&mut self, value: T) {
        for (_, handler) in std::mem::take(&mut self.waiters) {
            handler(value.clone());
        }
    }

    /// Number of handlers still waiting.
    pub fn pending(&self) -> usize {
        self.waiters.len()
    }
}
