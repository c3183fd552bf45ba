//! Observable screen state driven by reducers.

use tokio::sync::watch;

/// Request progress of a screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for user input.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Last request succeeded.
    Success,
    /// Last request or validation failed.
    Error,
}

impl Phase {
    /// Returns whether a request is in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Screen state that only changes by folding events into it.
pub trait Reducer: Clone + Send + Sync + 'static {
    /// Events this state understands.
    type Event;

    /// Returns the state that follows `event`.
    #[must_use]
    fn reduce(&self, event: Self::Event) -> Self;
}

/// Holds the current state of one screen and publishes every change.
pub struct Store<S> {
    tx: watch::Sender<S>,
}

impl<S: Reducer> Store<S> {
    /// Creates store with initial state.
    #[must_use]
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Applies event and notifies subscribers.
    pub fn dispatch(&self, event: S::Event) {
        self.tx.send_modify(|state| {
            let next = state.reduce(event);
            *state = next;
        });
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Returns a receiver that observes every future state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}

impl<S: Reducer + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
