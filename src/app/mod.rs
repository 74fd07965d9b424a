//! The application wiring: concrete state, actions and default reducers.
//!
//! This is the composition root's toolkit. It owns nothing; callers build an
//! [`AppRegistry`], populate it with [`register_reducers`] and hand it to
//! [`create_store`].

mod actions;
mod reducers;
mod state;

pub use actions::{ActionType, AppAction};
pub use reducers::register_reducers;
pub use state::{AppState, NestedDs, StateError};

use crate::core::ReducerRegistry;
use crate::store::Store;

pub type AppRegistry = ReducerRegistry<AppState, AppAction>;

pub type AppStore<'r> = Store<'r, AppState, AppAction>;

/// `{firstKey: false, nestedDs: {randomProperty: 1}}`
pub fn initial_state() -> AppState {
    AppState::default()
}

/// Create the application store over `registry`, starting at [`initial_state`].
pub fn create_store(registry: &AppRegistry) -> AppStore<'_> {
    Store::new(registry, initial_state())
}
