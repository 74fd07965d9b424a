//! View layer: projection of state into presentational units.
//!
//! `map_state_to_props` derives the slice a component needs, `render` turns
//! that slice into keyed children, and [`ConnectedView`] re-projects on
//! every state change while reporting whether the slice actually changed.

use crate::app::AppState;
use std::fmt;
use std::marker::PhantomData;

/// Props of the names list component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamesProps {
    pub no_empty_names: Vec<String>,
}

/// Keep the non-empty names, in order.
pub fn map_state_to_props(state: &AppState) -> NamesProps {
    NamesProps {
        no_empty_names: state
            .names()
            .iter()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect(),
    }
}

/// One rendered person, keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    pub key: String,
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: name.clone(),
            name,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lazy children of a rendered [`NamesProps`]. Clone to render again.
#[derive(Clone, Debug)]
pub struct Rendered<'a> {
    names: std::slice::Iter<'a, String>,
}

impl Iterator for Rendered<'_> {
    type Item = Person;

    fn next(&mut self) -> Option<Person> {
        self.names.next().map(Person::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl ExactSizeIterator for Rendered<'_> {}

/// Render one [`Person`] per name.
///
/// # Example
///
/// ```rust
/// use statewire::app::AppState;
/// use statewire::view::{map_state_to_props, render};
///
/// let state = AppState::default().with_names(vec![
///     String::new(),
///     "Alice".to_string(),
///     String::new(),
///     "Bob".to_string(),
/// ]);
/// let props = map_state_to_props(&state);
/// let names: Vec<String> = render(&props).map(|p| p.to_string()).collect();
///
/// assert_eq!(names, ["Alice", "Bob"]);
/// ```
pub fn render(props: &NamesProps) -> Rendered<'_> {
    Rendered {
        names: props.no_empty_names.iter(),
    }
}

/// A projection bound to a state source, remembering the last props.
pub struct ConnectedView<S, P, F> {
    project: F,
    props: Option<P>,
    _state: PhantomData<fn(&S)>,
}

impl<S, P, F> ConnectedView<S, P, F>
where
    P: PartialEq,
    F: Fn(&S) -> P,
{
    pub fn new(project: F) -> Self {
        Self {
            project,
            props: None,
            _state: PhantomData,
        }
    }

    /// Re-project `state`. Returns `true` when the props differ from the
    /// previous projection (always on the first call).
    pub fn update(&mut self, state: &S) -> bool {
        let next = (self.project)(state);
        if self.props.as_ref() == Some(&next) {
            return false;
        }
        self.props = Some(next);
        true
    }

    /// Props from the last update, if any.
    pub fn props(&self) -> Option<&P> {
        self.props.as_ref()
    }
}
