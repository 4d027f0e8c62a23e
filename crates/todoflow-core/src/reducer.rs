use chrono::Utc;

use super::actions::TodoAction;
use super::state::LoadStatus;
use super::state::TodoState;

#[cfg(test)]
mod tests;

/// The only writer of in-memory collection state. Total: no intent panics,
/// unhandled intents leave the state untouched (`ToggleSuccess` among them —
/// the toggle already happened on the request intent).
///
/// `Toggle` and `Reorder` mutate on the request intent, ahead of the
/// persistence confirmation, and nothing rolls them back if the write later
/// fails; failures only record their message.
pub fn reduce(state: &mut TodoState, action: &TodoAction) {
    match action {
        TodoAction::Load => {
            state.status = LoadStatus::Loading;
        }
        TodoAction::LoadSuccess { todos } => {
            state.set_all(todos.clone());
            state.status = LoadStatus::Success;
            state.error = None;
        }
        TodoAction::LoadFailure { error } => {
            state.error = Some(error.clone());
            state.status = LoadStatus::Error;
        }

        TodoAction::AddSuccess { todo } => {
            state.todos.insert(todo.id.clone(), todo.clone());
            state.error = None;
        }

        TodoAction::UpdateSuccess { todo } => {
            if state.todos.contains_key(&todo.id) {
                state.todos.insert(todo.id.clone(), todo.clone());
            }
            state.error = None;
        }

        TodoAction::DeleteSuccess { id } => {
            state.todos.remove(id);
            state.error = None;
        }

        TodoAction::Toggle { id } => {
            if let Some(todo) = state.todos.get_mut(id) {
                todo.completed = !todo.completed;
                todo.updated_at = Utc::now();
            }
        }

        TodoAction::Reorder { ids, .. } => {
            for (index, id) in ids.iter().enumerate() {
                if let Some(todo) = state.todos.get_mut(id) {
                    todo.position = Some(index as i64);
                }
            }
        }
        TodoAction::ReorderSuccess { todos } => {
            state.set_all(todos.clone());
            state.error = None;
        }

        TodoAction::AddFailure { error }
        | TodoAction::UpdateFailure { error }
        | TodoAction::DeleteFailure { error }
        | TodoAction::ToggleFailure { error } => {
            state.error = Some(error.clone());
        }

        TodoAction::Add { .. }
        | TodoAction::Update { .. }
        | TodoAction::Delete { .. }
        | TodoAction::ToggleSuccess { .. } => {}
    }
}
