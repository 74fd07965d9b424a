//! Application actions.

use crate::action_types;
use crate::core::Action;

action_types! {
    /// Tags of [`AppAction`].
    pub enum ActionType {
        Action1 => "action1",
        Action2 => "action2",
        Action3 => "action3",
    }
}

/// Every action the application can dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Action1,
    Action2,
    Action3 { param1: i64, param2: bool },
}

impl Action for AppAction {
    type Tag = ActionType;

    fn tag(&self) -> ActionType {
        match self {
            Self::Action1 => ActionType::Action1,
            Self::Action2 => ActionType::Action2,
            Self::Action3 { .. } => ActionType::Action3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_wire_names() {
        assert_eq!(AppAction::Action1.tag().as_str(), "action1");
        assert_eq!(AppAction::Action2.tag().as_str(), "action2");
        assert_eq!(
            AppAction::Action3 {
                param1: 0,
                param2: false
            }
            .tag()
            .as_str(),
            "action3"
        );
    }
}
