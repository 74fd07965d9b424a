//! Dispatch errors.

use thiserror::Error;

/// Errors that can occur when dispatching an action through the registry.
///
/// Both are authoring defects rather than runtime conditions: a missing
/// registration or a handler that produced no state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Couldn't find action from type {action_type}")]
    UnknownActionType { action_type: String },

    #[error("State returned by reducer {action_type} is faulty.")]
    InvalidReducerResult { action_type: String },
}

impl DispatchError {
    /// The tag of the action that failed.
    pub fn action_type(&self) -> &str {
        match self {
            Self::UnknownActionType { action_type } | Self::InvalidReducerResult { action_type } => {
                action_type
            }
        }
    }
}

/// A string did not name any tag in a closed set of action tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{action_type}' is not a known action type")]
pub struct ParseActionTypeError {
    pub action_type: String,
}
