use pretty_assertions::assert_eq;

use super::*;

#[test]
fn load_request_moves_status_to_loading() {
    let mut state = state();

    reduce(&mut state, &TodoAction::Load);

    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.todos.is_empty());
}

#[test]
fn load_success_replaces_the_collection() {
    let mut state = loaded(vec![todo("stale", "left over")]);

    reduce(
        &mut state,
        &TodoAction::LoadSuccess {
            todos: vec![todo("a", "one"), todo("b", "two")],
        },
    );

    assert_eq!(sorted_ids(&state), vec!["a", "b"]);
    assert_eq!(state.status, LoadStatus::Success);
    assert_eq!(state.error, None);
}

#[test]
fn load_success_is_idempotent() {
    let todos = vec![todo("a", "one"), todo("b", "two")];
    let mut state = state();

    reduce(
        &mut state,
        &TodoAction::LoadSuccess {
            todos: todos.clone(),
        },
    );
    let first = state.clone();
    reduce(&mut state, &TodoAction::LoadSuccess { todos });

    assert_eq!(state.todos, first.todos);
    assert_eq!(state.status, first.status);
    assert_eq!(state.error, first.error);
}

#[test]
fn load_failure_records_error_and_keeps_collection() {
    let mut state = loaded(vec![todo("a", "one")]);

    reduce(
        &mut state,
        &TodoAction::LoadFailure {
            error: "slot unreadable".to_string(),
        },
    );

    assert_eq!(state.status, LoadStatus::Error);
    assert_eq!(state.error.as_deref(), Some("slot unreadable"));
    assert_eq!(sorted_ids(&state), vec!["a"]);
}

#[test]
fn load_success_clears_a_previous_error() {
    let mut state = state();
    reduce(
        &mut state,
        &TodoAction::LoadFailure {
            error: "boom".to_string(),
        },
    );

    reduce(&mut state, &TodoAction::LoadSuccess { todos: Vec::new() });

    assert_eq!(state.error, None);
    assert_eq!(state.status, LoadStatus::Success);
}
