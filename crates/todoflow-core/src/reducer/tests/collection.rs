use pretty_assertions::assert_eq;

use super::*;

#[test]
fn add_success_inserts_one_record_and_clears_error() {
    let mut state = state();
    state.error = Some("stale".to_string());

    reduce(
        &mut state,
        &TodoAction::AddSuccess {
            todo: todo("a", "one"),
        },
    );

    assert_eq!(sorted_ids(&state), vec!["a"]);
    assert_eq!(state.error, None);
}

#[test]
fn update_success_replaces_the_record_by_id() {
    let mut state = loaded(vec![todo("a", "one")]);
    let mut changed = todo("a", "one, renamed");
    changed.completed = true;

    reduce(
        &mut state,
        &TodoAction::UpdateSuccess {
            todo: changed.clone(),
        },
    );

    assert_eq!(state.todos[&TodoId::from("a")], changed);
}

#[test]
fn update_success_for_unknown_id_does_not_insert() {
    let mut state = loaded(vec![todo("a", "one")]);

    reduce(
        &mut state,
        &TodoAction::UpdateSuccess {
            todo: todo("ghost", "never added"),
        },
    );

    assert_eq!(sorted_ids(&state), vec!["a"]);
}

#[test]
fn delete_success_removes_the_record() {
    let mut state = loaded(vec![todo("a", "one"), todo("b", "two")]);

    reduce(
        &mut state,
        &TodoAction::DeleteSuccess {
            id: TodoId::from("a"),
        },
    );

    assert_eq!(sorted_ids(&state), vec!["b"]);
    assert_eq!(state.error, None);
}

#[test]
fn request_intents_for_add_update_delete_leave_state_untouched() {
    let mut state = loaded(vec![todo("a", "one")]);
    let before = state.clone();

    reduce(
        &mut state,
        &TodoAction::Add {
            draft: crate::model::TodoDraft::new("pending"),
        },
    );
    reduce(
        &mut state,
        &TodoAction::Update {
            id: TodoId::from("a"),
            changes: TodoChanges::title("renamed"),
        },
    );
    reduce(
        &mut state,
        &TodoAction::Delete {
            id: TodoId::from("a"),
        },
    );

    assert_eq!(state.todos, before.todos);
    assert_eq!(state.status, before.status);
}

#[test]
fn toggle_success_is_a_no_op() {
    let mut state = loaded(vec![todo("a", "one")]);
    let before = state.clone();
    let mut flipped = todo("a", "one");
    flipped.completed = true;

    reduce(&mut state, &TodoAction::ToggleSuccess { todo: flipped });

    assert_eq!(state.todos, before.todos);
}

#[test]
fn trace_replay_yields_exactly_the_implied_id_set() {
    let mut state = state();

    for id in ["a", "b", "c", "d"] {
        reduce(
            &mut state,
            &TodoAction::AddSuccess {
                todo: todo(id, id),
            },
        );
    }
    reduce(
        &mut state,
        &TodoAction::UpdateSuccess {
            todo: todo("b", "b, renamed"),
        },
    );
    reduce(
        &mut state,
        &TodoAction::DeleteSuccess {
            id: TodoId::from("c"),
        },
    );
    reduce(
        &mut state,
        &TodoAction::AddSuccess {
            todo: todo("e", "e"),
        },
    );

    assert_eq!(sorted_ids(&state), vec!["a", "b", "d", "e"]);
    assert_eq!(state.len(), 4);
}
