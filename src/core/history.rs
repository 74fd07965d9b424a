//! Dispatch history tracking.
//!
//! Every successful dispatch through a store is recorded as an immutable
//! [`DispatchRecord`] in a [`DispatchHistory`], optionally bounded to the
//! most recent records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};
use std::time::Duration;

/// Record of a single successful dispatch.
///
/// # Example
///
/// ```rust
/// use statewire::core::DispatchRecord;
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     action_type: "increment".to_string(),
///     from: 1,
///     to: 2,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord<S> {
    /// Tag of the dispatched action
    pub action_type: String,
    /// State before the dispatch
    pub from: S,
    /// State the handler returned
    pub to: S,
    /// When the dispatch completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of dispatches.
///
/// `record` returns a new history with the record appended and leaves the
/// original untouched; `push` appends in place. A history built with
/// [`DispatchHistory::with_limit`] keeps only the newest `limit` records.
///
/// # Example
///
/// ```rust
/// use statewire::core::{DispatchHistory, DispatchRecord};
/// use chrono::Utc;
///
/// let history = DispatchHistory::new();
/// let history = history.record(DispatchRecord {
///     action_type: "double".to_string(),
///     from: 2,
///     to: 4,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(DispatchRecord {
///     action_type: "double".to_string(),
///     from: 4,
///     to: 8,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&2, &4, &8]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchHistory<S> {
    records: VecDeque<DispatchRecord<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S> Default for DispatchHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DispatchHistory<S> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// Once full, appending a record drops the oldest one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained records, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, returning a new history.
    pub fn record(&self, record: DispatchRecord<S>) -> Self
    where
        S: Clone,
    {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a record in place, evicting the oldest past the limit.
    pub fn push(&mut self, record: DispatchRecord<S>) {
        if self.limit == Some(0) {
            return;
        }
        self.records.push_back(record);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    /// States traversed: the oldest retained record's `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Tags dispatched, oldest first.
    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.action_type.as_str())
    }

    /// Time between the first and last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> vec_deque::Iter<'_, DispatchRecord<S>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
