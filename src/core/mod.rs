//! Core dispatch types and logic.
//!
//! This module contains the generic part of the container:
//! - Actions and their closed tag sets via the `Action` trait
//! - The reducer registry and its bootstrap reducing function
//! - Immutable dispatch history
//!
//! Handlers registered here are expected to be pure: state in, state out.

mod action;
mod error;
mod history;
mod registry;

pub use action::Action;
pub use error::{DispatchError, ParseActionTypeError};
pub use history::{DispatchHistory, DispatchRecord};
pub use registry::{BoundReducer, Handler, ReducerRegistry};
