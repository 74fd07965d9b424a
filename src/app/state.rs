//! Application state tree.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors loading or writing a state document.
#[derive(Debug, Error)]
pub enum StateError {
    /// Reading or writing the JSON document failed.
    #[error("State document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Nested sub-document of [`AppState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedDs {
    pub random_property: i64,
}

/// Immutable application state.
///
/// Updates go through the `with_*` methods, which return a new value and
/// share every untouched sub-document with the original through `Arc`.
/// Equality compares values, not pointers.
///
/// # Example
///
/// ```rust
/// use statewire::app::AppState;
///
/// let state = AppState::default();
/// let next = state.with_first_key(true);
///
/// assert!(!state.first_key());
/// assert!(next.first_key());
/// assert!(next.shares_nested_ds_with(&state));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(deserialize_with = "flag_from_bool_or_number")]
    first_key: bool,
    nested_ds: Arc<NestedDs>,
    #[serde(default)]
    names: Arc<Vec<String>>,
}

impl Default for AppState {
    /// `{firstKey: false, nestedDs: {randomProperty: 1}, names: []}`
    fn default() -> Self {
        Self {
            first_key: false,
            nested_ds: Arc::new(NestedDs { random_property: 1 }),
            names: Arc::default(),
        }
    }
}

impl AppState {
    pub fn new(first_key: bool, random_property: i64, names: Vec<String>) -> Self {
        Self {
            first_key,
            nested_ds: Arc::new(NestedDs { random_property }),
            names: Arc::new(names),
        }
    }

    /// Load a state document from JSON.
    ///
    /// `firstKey` may be a boolean or a number, non-zero meaning `true`.
    /// `names` may be omitted.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn first_key(&self) -> bool {
        self.first_key
    }

    pub fn nested_ds(&self) -> &NestedDs {
        &self.nested_ds
    }

    pub fn random_property(&self) -> i64 {
        self.nested_ds.random_property
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn with_first_key(&self, first_key: bool) -> Self {
        Self {
            first_key,
            ..self.clone()
        }
    }

    pub fn with_random_property(&self, random_property: i64) -> Self {
        Self {
            nested_ds: Arc::new(NestedDs { random_property }),
            ..self.clone()
        }
    }

    pub fn with_names(&self, names: Vec<String>) -> Self {
        Self {
            names: Arc::new(names),
            ..self.clone()
        }
    }

    /// Whether both states point at the same nested document.
    pub fn shares_nested_ds_with(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.nested_ds, &other.nested_ds)
    }

    /// Whether both states point at the same names list.
    pub fn shares_names_with(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.names, &other.names)
    }
}

fn flag_from_bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Number(n) => n != 0.0,
    })
}
