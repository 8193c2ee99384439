//! Tests for #[derive(Action)] macro

use tickbox_core::action::Action as _;
use tickbox_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum TodoAction {
    Add {
        text: String,
    },

    ToggleTodo(String),

    #[action(name = "wipe")]
    Clear,
}

#[derive(Action, Clone, Debug)]
enum Wrapped<T> {
    Inner(T),
}

#[test]
fn test_named_variant() {
    let action = TodoAction::Add {
        text: "Buy milk".to_string(),
    };
    assert_eq!(action.name(), "add");
}

#[test]
fn test_tuple_variant() {
    assert_eq!(TodoAction::ToggleTodo("1".to_string()).name(), "toggle_todo");
}

#[test]
fn test_name_override() {
    assert_eq!(TodoAction::Clear.name(), "wipe");
}

#[test]
fn test_generic_enum() {
    assert_eq!(Wrapped::Inner(3_u8).name(), "inner");
}

#[test]
fn test_name_is_stable_across_clones() {
    let action = TodoAction::Add {
        text: "a".to_string(),
    };
    let cloned = action.clone();
    assert_eq!(action, cloned);
    assert_eq!(action.name(), cloned.name());
}
