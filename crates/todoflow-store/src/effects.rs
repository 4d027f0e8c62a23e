use chrono::Utc;
use todoflow_core::selectors;
use todoflow_core::Todo;
use todoflow_core::TodoAction;
use todoflow_core::TodoChanges;
use todoflow_core::TodoDraft;
use todoflow_core::TodoId;
use todoflow_core::TodoState;
use tracing::debug;
use tracing::warn;

use crate::error::EffectError;
use crate::storage::StorageAdapter;

/// Runs the side effect for one intent, after the reducer has already seen
/// it, and returns the follow-up intent — exactly one per request intent,
/// except Toggle on a missing id, which deliberately returns nothing.
///
/// Success/failure intents carry no effects; they return `None`.
pub fn handle<S: StorageAdapter>(
    action: &TodoAction,
    state: &TodoState,
    storage: &mut S,
) -> Option<TodoAction> {
    let follow_up = match action {
        TodoAction::Load => Some(load(storage).unwrap_or_else(|err| {
            warn!(error = %err, "load failed");
            TodoAction::LoadFailure {
                error: err.to_string(),
            }
        })),
        TodoAction::Add { draft } => Some(add(draft, storage).unwrap_or_else(|err| {
            warn!(error = %err, "add failed");
            TodoAction::AddFailure {
                error: err.to_string(),
            }
        })),
        TodoAction::Update { id, changes } => {
            Some(update(id, changes, state, storage).unwrap_or_else(|err| {
                warn!(id = %id, error = %err, "update failed");
                TodoAction::UpdateFailure {
                    error: err.to_string(),
                }
            }))
        }
        TodoAction::Delete { id } => Some(delete(id, storage).unwrap_or_else(|err| {
            warn!(id = %id, error = %err, "delete failed");
            TodoAction::DeleteFailure {
                error: err.to_string(),
            }
        })),
        TodoAction::Toggle { id } => match toggle(id, state, storage) {
            Ok(follow_up) => follow_up,
            Err(err) => {
                warn!(id = %id, error = %err, "toggle failed");
                Some(TodoAction::ToggleFailure {
                    error: err.to_string(),
                })
            }
        },
        // Reorder errors surface through the update failure channel.
        TodoAction::Reorder { ids, .. } => Some(reorder(ids, state, storage).unwrap_or_else(
            |err| {
                warn!(error = %err, "reorder failed");
                TodoAction::UpdateFailure {
                    error: err.to_string(),
                }
            },
        )),
        _ => None,
    };

    if let Some(follow_up) = follow_up.as_ref() {
        debug!(intent = action.label(), next = follow_up.label(), "effect");
    }
    follow_up
}

fn load<S: StorageAdapter>(storage: &mut S) -> Result<TodoAction, EffectError> {
    let todos = storage.load()?;
    Ok(TodoAction::LoadSuccess { todos })
}

fn add<S: StorageAdapter>(draft: &TodoDraft, storage: &mut S) -> Result<TodoAction, EffectError> {
    let now = Utc::now();
    let todo = Todo {
        id: TodoId(uuid::Uuid::new_v4().to_string()),
        title: draft.title.clone(),
        description: draft.description.clone(),
        completed: draft.completed,
        created_at: now,
        updated_at: now,
        ttl: None,
        position: None,
    };
    storage.add(&todo)?;
    Ok(TodoAction::AddSuccess { todo })
}

fn update<S: StorageAdapter>(
    id: &TodoId,
    changes: &TodoChanges,
    state: &TodoState,
    storage: &mut S,
) -> Result<TodoAction, EffectError> {
    let current = selectors::todo_by_id(state, id).ok_or(EffectError::NotFound)?;
    let mut merged = current.applying(changes);
    merged.updated_at = Utc::now();
    storage.update(&merged)?;
    Ok(TodoAction::UpdateSuccess { todo: merged })
}

/// The reducer already flipped the record on the request intent, so the
/// current state holds the value to persist. A missing id is a silent no-op,
/// not a failure — the one intent with no terminal follow-up.
fn toggle<S: StorageAdapter>(
    id: &TodoId,
    state: &TodoState,
    storage: &mut S,
) -> Result<Option<TodoAction>, EffectError> {
    let Some(current) = selectors::todo_by_id(state, id) else {
        return Ok(None);
    };
    storage.update(current)?;
    Ok(Some(TodoAction::ToggleSuccess {
        todo: current.clone(),
    }))
}

fn delete<S: StorageAdapter>(id: &TodoId, storage: &mut S) -> Result<TodoAction, EffectError> {
    storage.delete(id)?;
    Ok(TodoAction::DeleteSuccess { id: id.clone() })
}

/// Renumbers the whole collection: a record's position becomes the index of
/// its id in the supplied list, `-1` when absent. The dragged group's flag
/// rides along in the intent but the renumbering spans every record.
fn reorder<S: StorageAdapter>(
    ids: &[TodoId],
    state: &TodoState,
    storage: &mut S,
) -> Result<TodoAction, EffectError> {
    if state.is_empty() {
        return Err(EffectError::Empty);
    }
    let mut todos = selectors::all_todos(state);
    for todo in &mut todos {
        let position = ids
            .iter()
            .position(|id| *id == todo.id)
            .map(|index| index as i64)
            .unwrap_or(-1);
        todo.position = Some(position);
    }
    storage.save_all(&todos)?;
    Ok(TodoAction::ReorderSuccess { todos })
}
