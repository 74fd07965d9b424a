//! Actions and their tags.
//!
//! An action is a tagged value describing an intended state change. The tag
//! is what the registry keys handlers by; the rest of the action is payload
//! the handler may read.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A dispatchable action.
///
/// `tag` must be computed from the variant alone (an exhaustive `match`),
/// so that two actions of the same variant always share a tag.
///
/// # Example
///
/// ```rust
/// use statewire::action_types;
/// use statewire::core::Action;
///
/// action_types! {
///     pub enum CounterActionType {
///         Increment => "increment",
///         Reset => "reset",
///     }
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment { by: u32 },
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     type Tag = CounterActionType;
///
///     fn tag(&self) -> Self::Tag {
///         match self {
///             Self::Increment { .. } => CounterActionType::Increment,
///             Self::Reset => CounterActionType::Reset,
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Increment { by: 2 }.tag().as_str(), "increment");
/// ```
pub trait Action: Debug {
    /// Closed set of tags. `Display` must produce the tag's string name.
    type Tag: Copy + Eq + Hash + Debug + Display;

    /// The tag identifying which handler this action goes to.
    fn tag(&self) -> Self::Tag;
}

/// Declare a closed set of action tags, each with its string name.
///
/// Generates the enum plus `ALL`, `as_str`, `Display` and `FromStr`.
///
/// # Example
///
/// ```
/// use statewire::action_types;
///
/// action_types! {
///     pub enum TodoActionType {
///         Add => "todo/add",
///         Remove => "todo/remove",
///     }
/// }
///
/// assert_eq!(TodoActionType::Add.to_string(), "todo/add");
/// assert_eq!("todo/remove".parse::<TodoActionType>().unwrap(), TodoActionType::Remove);
/// assert_eq!(TodoActionType::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! action_types {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $tag:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every tag in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The tag's string name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseActionTypeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    other => Err($crate::core::ParseActionTypeError {
                        action_type: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParseActionTypeError;

    action_types! {
        enum TestActionType {
            Start => "start",
            Stop => "stop",
        }
    }

    #[derive(Debug)]
    enum TestAction {
        Start { speed: u8 },
        Stop,
    }

    impl Action for TestAction {
        type Tag = TestActionType;

        fn tag(&self) -> Self::Tag {
            match self {
                Self::Start { .. } => TestActionType::Start,
                Self::Stop => TestActionType::Stop,
            }
        }
    }

    #[test]
    fn tag_ignores_payload() {
        assert_eq!(
            TestAction::Start { speed: 1 }.tag(),
            TestAction::Start { speed: 9 }.tag()
        );
        assert_ne!(TestAction::Start { speed: 1 }.tag(), TestAction::Stop.tag());
    }

    #[test]
    fn display_uses_declared_name() {
        assert_eq!(TestActionType::Start.to_string(), "start");
        assert_eq!(TestActionType::Stop.as_str(), "stop");
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestActionType::ALL,
            &[TestActionType::Start, TestActionType::Stop]
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!("stop".parse::<TestActionType>(), Ok(TestActionType::Stop));
        assert_eq!(
            "pause".parse::<TestActionType>(),
            Err(ParseActionTypeError {
                action_type: "pause".to_string()
            })
        );
    }

    #[test]
    fn macro_supports_variant_attributes() {
        action_types! {
            pub enum Documented {
                /// The only one
                Only => "only",
            }
        }

        assert_eq!(Documented::Only.as_str(), "only");
    }
}
