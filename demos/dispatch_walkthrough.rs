//! Wires the registry, store and view together and walks through a few dispatches.
//!
//! Run with `RUST_LOG=debug` to see registration and dispatch events.

use statewire::app::{self, AppAction, AppRegistry, AppState};
use statewire::store::Store;
use statewire::view::{map_state_to_props, render, ConnectedView};
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const INITIAL_STATE: &str = r#"{
    "firstKey": 0,
    "nestedDs": { "randomProperty": 1 },
    "names": ["", "Alice", "", "Bob"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Reducer Registry Demo ===\n");

    let mut registry = AppRegistry::new();
    app::register_reducers(&mut registry);

    let initial = AppState::from_json(INITIAL_STATE)?;
    let mut store = Store::new(&registry, initial);

    let view = Rc::new(RefCell::new(ConnectedView::new(map_state_to_props)));
    view.borrow_mut().update(store.get_state());
    print_view(&view.borrow());

    let handle = Rc::clone(&view);
    store.subscribe(move |state: &AppState| {
        let mut view = handle.borrow_mut();
        if view.update(state) {
            print_view(&view);
        }
    });

    let actions = [
        AppAction::Action1,
        AppAction::Action3 {
            param1: 42,
            param2: true,
        },
        AppAction::Action2,
    ];

    for action in actions {
        println!("Dispatching {action:?}");
        match store.dispatch(action) {
            Ok(state) => println!("  -> {}", state.to_json()?),
            Err(e) => println!("  -> failed: {e}"),
        }
    }

    println!("\nHistory:");
    for record in store.history().records() {
        println!("  {} at {}", record.action_type, record.timestamp);
    }

    Ok(())
}

fn print_view<F>(view: &ConnectedView<AppState, statewire::view::NamesProps, F>)
where
    F: Fn(&AppState) -> statewire::view::NamesProps,
{
    let Some(props) = view.props() else {
        return;
    };
    println!("View:");
    for person in render(props) {
        println!("  [{}] {}", person.key, person);
    }
}
