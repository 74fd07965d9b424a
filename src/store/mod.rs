//! Store: holder of the current state.
//!
//! The store owns the current state, runs the bound reducer on each
//! dispatch, keeps the dispatch history and notifies subscribers. It borrows
//! the registry, so registrations cannot change while a store is alive.

use crate::core::{
    Action, BoundReducer, DispatchError, DispatchHistory, DispatchRecord, ReducerRegistry,
};
use chrono::Utc;
use tracing::debug;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<'r, S> = Box<dyn FnMut(&S) + 'r>;

/// Records kept by a store created with [`Store::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Single holder of application state.
///
/// # Example
///
/// ```rust
/// use statewire::app::{self, AppAction, AppRegistry};
///
/// let mut registry = AppRegistry::new();
/// app::register_reducers(&mut registry);
///
/// let mut store = app::create_store(&registry);
/// store.dispatch(AppAction::Action1).unwrap();
///
/// assert!(store.get_state().first_key());
/// ```
pub struct Store<'r, S, A: Action> {
    reducer: BoundReducer<'r, S, A>,
    state: S,
    history: DispatchHistory<S>,
    listeners: Vec<(SubscriptionId, Listener<'r, S>)>,
    next_subscription: u64,
}

impl<'r, S: Clone + 'static, A: Action + 'static> Store<'r, S, A> {
    /// Create a store over `registry`, starting at `initial`, keeping the
    /// last [`DEFAULT_HISTORY_LIMIT`] dispatches.
    ///
    /// The starting state is what the bound reducer yields for an absent
    /// state, which is always `initial`.
    pub fn new(registry: &'r ReducerRegistry<S, A>, initial: S) -> Self {
        Self::with_history_limit(registry, initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Like [`Store::new`], keeping at most `limit` dispatch records.
    /// A limit of zero disables history.
    pub fn with_history_limit(
        registry: &'r ReducerRegistry<S, A>,
        initial: S,
        limit: usize,
    ) -> Self {
        let reducer = registry.bind(initial);
        let state = reducer.initial().clone();
        Self {
            reducer,
            state,
            history: DispatchHistory::with_limit(limit),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current state.
    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// The most recent successful dispatches, oldest first.
    pub fn history(&self) -> &DispatchHistory<S> {
        &self.history
    }

    /// Register a listener called with the new state after each successful
    /// dispatch, in subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'r,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Reduce `action` into the next state.
    ///
    /// On failure nothing changes: state, history and listeners are left
    /// as they were and the error is returned.
    pub fn dispatch(&mut self, action: A) -> Result<&S, DispatchError> {
        let next = self.reducer.reduce(Some(&self.state), &action)?;
        let action_type = action.tag().to_string();
        debug!(action_type = %action_type, "action dispatched");

        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(DispatchRecord {
            action_type,
            from: previous,
            to: self.state.clone(),
            timestamp: Utc::now(),
        });

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }

        Ok(&self.state)
    }
}
