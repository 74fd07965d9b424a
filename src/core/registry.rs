//! Reducer registry: action tag to handler mapping.

use super::action::Action;
use super::error::DispatchError;
use std::collections::HashMap;
use tracing::{debug, error};

/// Boxed reducer. `None` stands for an empty result.
pub type Handler<S, A> = Box<dyn Fn(&S, &A) -> Option<S> + Send + Sync>;

/// Mapping from action tag to a pure handler `(state, action) -> state`.
///
/// The registry is an ordinary value owned by whoever composes the
/// application. It is mutated through `&mut self` during setup and only
/// read while dispatching, so a store holding `&ReducerRegistry` rules out
/// registration in the middle of a dispatch cycle.
///
/// # Example
///
/// ```rust
/// use statewire::action_types;
/// use statewire::core::{Action, ReducerRegistry};
///
/// action_types! {
///     enum Tag {
///         Bump => "bump",
///     }
/// }
///
/// #[derive(Debug)]
/// struct Bump;
///
/// impl Action for Bump {
///     type Tag = Tag;
///     fn tag(&self) -> Tag {
///         Tag::Bump
///     }
/// }
///
/// let mut registry = ReducerRegistry::<u32, Bump>::new();
/// registry.register(Tag::Bump, |count: &u32, _: &Bump| count + 1);
///
/// assert_eq!(registry.dispatch(&1, &Bump).unwrap(), 2);
/// ```
pub struct ReducerRegistry<S, A: Action> {
    handlers: HashMap<A::Tag, Handler<S, A>>,
}

impl<S: 'static, A: Action + 'static> ReducerRegistry<S, A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.handlers.clear();
        debug!("reducer registry cleared");
    }

    /// Register `handler` for `tag`, replacing any previous handler.
    ///
    /// The handler may return a state directly or an `Option` of one;
    /// returning `None` makes dispatch fail with
    /// [`DispatchError::InvalidReducerResult`]. Returns `tag`.
    pub fn register<F, R>(&mut self, tag: A::Tag, handler: F) -> A::Tag
    where
        F: Fn(&S, &A) -> R + Send + Sync + 'static,
        R: Into<Option<S>> + 'static,
    {
        let boxed: Handler<S, A> =
            Box::new(move |state: &S, action: &A| handler(state, action).into());
        let replaced = self.handlers.insert(tag, boxed).is_some();
        debug!(action_type = %tag, replaced, "reducer registered");
        tag
    }

    /// Check whether a handler is registered for `tag`.
    pub fn contains(&self, tag: A::Tag) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = A::Tag> + '_ {
        self.handlers.keys().copied()
    }

    /// Run the handler registered for `action`'s tag against `state`.
    ///
    /// An unregistered tag is logged at error level and returned as
    /// [`DispatchError::UnknownActionType`]. The handler's result is
    /// returned as is.
    pub fn dispatch(&self, state: &S, action: &A) -> Result<S, DispatchError> {
        let tag = action.tag();

        let Some(handler) = self.handlers.get(&tag) else {
            let err = DispatchError::UnknownActionType {
                action_type: tag.to_string(),
            };
            error!(action_type = %tag, "{err}");
            return Err(err);
        };

        handler(state, action).ok_or_else(|| DispatchError::InvalidReducerResult {
            action_type: tag.to_string(),
        })
    }

    /// Dispatch with bootstrap: an absent `state` yields `initial` untouched,
    /// without looking at `action` or the registry.
    pub fn reduce(&self, initial: &S, state: Option<&S>, action: &A) -> Result<S, DispatchError>
    where
        S: Clone,
    {
        match state {
            None => Ok(initial.clone()),
            Some(state) => self.dispatch(state, action),
        }
    }

    /// Bind `initial` as the fallback state, producing the reducing function
    /// a [`Store`](crate::store::Store) runs.
    pub fn bind(&self, initial: S) -> BoundReducer<'_, S, A> {
        BoundReducer {
            registry: self,
            initial,
        }
    }
}

impl<S: 'static, A: Action + 'static> Default for ReducerRegistry<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry with its initial state bound.
pub struct BoundReducer<'r, S, A: Action> {
    registry: &'r ReducerRegistry<S, A>,
    initial: S,
}

impl<'r, S: Clone + 'static, A: Action + 'static> BoundReducer<'r, S, A> {
    /// The state returned for an absent input.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn registry(&self) -> &'r ReducerRegistry<S, A> {
        self.registry
    }

    /// See [`ReducerRegistry::reduce`].
    pub fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, DispatchError> {
        self.registry.reduce(&self.initial, state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_types;

    action_types! {
        enum TestTag {
            Add => "add",
            Double => "double",
            Broken => "broken",
            Missing => "missing",
        }
    }

    #[derive(Debug)]
    enum TestAction {
        Add(i32),
        Double,
        Broken,
        Missing,
    }

    impl Action for TestAction {
        type Tag = TestTag;

        fn tag(&self) -> TestTag {
            match self {
                Self::Add(_) => TestTag::Add,
                Self::Double => TestTag::Double,
                Self::Broken => TestTag::Broken,
                Self::Missing => TestTag::Missing,
            }
        }
    }

    fn registry() -> ReducerRegistry<i32, TestAction> {
        let mut registry = ReducerRegistry::new();
        registry.register(TestTag::Add, |state: &i32, action: &TestAction| {
            match action {
                TestAction::Add(n) => state + n,
                _ => *state,
            }
        });
        registry.register(TestTag::Double, |state: &i32, _: &TestAction| state * 2);
        registry
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = ReducerRegistry::<i32, TestAction>::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn register_returns_the_tag() {
        let mut registry = ReducerRegistry::<i32, TestAction>::new();
        let tag = registry.register(TestTag::Double, |s: &i32, _: &TestAction| *s);
        assert_eq!(tag, TestTag::Double);
        assert!(registry.contains(TestTag::Double));
    }

    #[test]
    fn dispatch_runs_the_matching_handler() {
        let registry = registry();
        assert_eq!(registry.dispatch(&3, &TestAction::Add(4)), Ok(7));
        assert_eq!(registry.dispatch(&3, &TestAction::Double), Ok(6));
    }

    #[test]
    fn dispatch_fails_for_unregistered_tag() {
        let registry = registry();
        let result = registry.dispatch(&3, &TestAction::Missing);
        assert_eq!(
            result,
            Err(DispatchError::UnknownActionType {
                action_type: "missing".to_string()
            })
        );
    }

    #[test]
    fn dispatch_fails_when_handler_returns_nothing() {
        let mut registry = registry();
        registry.register(TestTag::Broken, |_: &i32, _: &TestAction| None::<i32>);

        let result = registry.dispatch(&3, &TestAction::Broken);
        assert_eq!(
            result,
            Err(DispatchError::InvalidReducerResult {
                action_type: "broken".to_string()
            })
        );
    }

    #[test]
    fn handler_may_return_option() {
        let mut registry = ReducerRegistry::<i32, TestAction>::new();
        registry.register(TestTag::Add, |s: &i32, action: &TestAction| match action {
            TestAction::Add(n) => s.checked_add(*n),
            _ => None,
        });

        assert_eq!(registry.dispatch(&1, &TestAction::Add(1)), Ok(2));
        assert!(registry.dispatch(&i32::MAX, &TestAction::Add(1)).is_err());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = registry();
        registry.register(TestTag::Double, |s: &i32, _: &TestAction| s * 10);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dispatch(&3, &TestAction::Double), Ok(30));
    }

    #[test]
    fn clear_removes_every_handler() {
        let mut registry = registry();
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.dispatch(&3, &TestAction::Double).is_err());
    }

    #[test]
    fn tags_lists_registrations() {
        let registry = registry();
        let mut tags: Vec<_> = registry.tags().map(|t| t.as_str()).collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!["add", "double"]);
    }

    #[test]
    fn reduce_without_state_returns_initial() {
        let registry = registry();
        assert_eq!(registry.reduce(&5, None, &TestAction::Missing), Ok(5));
        assert_eq!(registry.reduce(&5, None, &TestAction::Double), Ok(5));
    }

    #[test]
    fn reduce_with_state_dispatches() {
        let registry = registry();
        assert_eq!(registry.reduce(&5, Some(&2), &TestAction::Double), Ok(4));
    }

    #[test]
    fn bound_reducer_uses_bound_initial() {
        let registry = registry();
        let reducer = registry.bind(9);

        assert_eq!(reducer.initial(), &9);
        assert_eq!(reducer.registry().len(), 2);
        assert_eq!(reducer.reduce(None, &TestAction::Add(1)), Ok(9));
        assert_eq!(reducer.reduce(Some(&9), &TestAction::Add(1)), Ok(10));
    }
}
