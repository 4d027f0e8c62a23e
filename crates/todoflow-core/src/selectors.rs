use std::cmp::Ordering;

use super::model::Todo;
use super::model::TodoId;
use super::state::LoadStatus;
use super::state::TodoState;

/// Display order: incomplete before complete, then ascending position within
/// each group (missing position counts as 0). Trailing keys keep the order
/// deterministic for equal positions.
pub fn display_order(a: &Todo, b: &Todo) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.position.unwrap_or(0).cmp(&b.position.unwrap_or(0)))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Every todo, in display order.
pub fn all_todos(state: &TodoState) -> Vec<Todo> {
    let mut todos: Vec<Todo> = state.todos.values().cloned().collect();
    todos.sort_by(display_order);
    todos
}

/// Incomplete todos, in display order.
pub fn active_todos(state: &TodoState) -> Vec<Todo> {
    all_todos(state)
        .into_iter()
        .filter(|todo| !todo.completed)
        .collect()
}

/// Completed todos, in display order.
pub fn completed_todos(state: &TodoState) -> Vec<Todo> {
    all_todos(state)
        .into_iter()
        .filter(|todo| todo.completed)
        .collect()
}

pub fn todo_by_id<'a>(state: &'a TodoState, id: &TodoId) -> Option<&'a Todo> {
    state.todos.get(id)
}

pub fn status(state: &TodoState) -> LoadStatus {
    state.status
}

pub fn error(state: &TodoState) -> Option<&str> {
    state.error.as_deref()
}

/// Case-insensitive substring match against title or description, applied
/// over an already-selected list. Never persisted, not part of state.
pub fn search_todos(todos: &[Todo], term: &str) -> Vec<Todo> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return todos.to_vec();
    }
    todos
        .iter()
        .filter(|todo| {
            todo.title.to_lowercase().contains(&term)
                || todo
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}
