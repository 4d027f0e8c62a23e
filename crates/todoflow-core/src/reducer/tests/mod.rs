use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

pub(super) use super::reduce;
pub(super) use crate::actions::TodoAction;
pub(super) use crate::model::Todo;
pub(super) use crate::model::TodoChanges;
pub(super) use crate::model::TodoId;
pub(super) use crate::state::LoadStatus;
pub(super) use crate::state::TodoState;

mod collection;
mod loading;

fn state() -> TodoState {
    TodoState::new()
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn todo(id: &str, title: &str) -> Todo {
    Todo {
        id: TodoId::from(id),
        title: title.to_string(),
        description: None,
        completed: false,
        created_at: epoch(),
        updated_at: epoch(),
        ttl: None,
        position: None,
    }
}

fn positioned(id: &str, title: &str, position: i64) -> Todo {
    Todo {
        position: Some(position),
        ..todo(id, title)
    }
}

fn loaded(todos: Vec<Todo>) -> TodoState {
    let mut state = state();
    reduce(&mut state, &TodoAction::LoadSuccess { todos });
    state
}

fn sorted_ids(state: &TodoState) -> Vec<String> {
    let mut ids: Vec<String> = state
        .todos
        .keys()
        .map(|id| id.as_str().to_string())
        .collect();
    ids.sort();
    ids
}
