//! Statewire: a typed reducer registry for unidirectional data flow
//!
//! Actions flow into a [`Store`], which hands `(state, action)` to a
//! [`ReducerRegistry`]. The registry finds the handler registered for the
//! action's tag and returns the next state, which replaces the store's state
//! wholesale. Views subscribe to the store and re-project the slice they need.
//!
//! # Core Concepts
//!
//! - **Action**: a closed enum whose tag selects a handler, via the `Action` trait
//! - **Registry**: tag to pure handler mapping, owned by the caller
//! - **Store**: current state, history and subscribers
//! - **View**: state projection and keyed rendering
//!
//! # Example
//!
//! ```rust
//! use statewire::app::{self, AppAction, AppRegistry};
//! use statewire::core::DispatchError;
//!
//! let mut registry = AppRegistry::new();
//! app::register_reducers(&mut registry);
//! let mut store = app::create_store(&registry);
//!
//! store.dispatch(AppAction::Action1).unwrap();
//! store
//!     .dispatch(AppAction::Action3 { param1: 42, param2: true })
//!     .unwrap();
//!
//! assert!(store.get_state().first_key());
//! assert_eq!(store.get_state().random_property(), 42);
//!
//! let err = store.dispatch(AppAction::Action2).unwrap_err();
//! assert!(matches!(err, DispatchError::UnknownActionType { .. }));
//! ```

pub mod app;
pub mod core;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Action, DispatchError, ReducerRegistry};
pub use store::{Store, SubscriptionId};
