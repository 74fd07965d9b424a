//! Default reducer wiring.

use super::actions::{ActionType, AppAction};
use super::state::AppState;
use super::AppRegistry;

/// Reset `registry` and install the application's handlers.
///
/// `action2` is deliberately left without a handler.
pub fn register_reducers(registry: &mut AppRegistry) {
    registry.clear();

    registry.register(ActionType::Action1, |state: &AppState, _: &AppAction| {
        state.with_first_key(true)
    });

    registry.register(ActionType::Action3, |state: &AppState, action: &AppAction| {
        match action {
            AppAction::Action3 { param1, .. } => Some(state.with_random_property(*param1)),
            _ => None,
        }
    });
}
