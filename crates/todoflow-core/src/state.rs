use std::collections::HashMap;

use super::model::Todo;
use super::model::TodoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Error,
    Success,
}

impl LoadStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// The one in-memory collection state. Created at startup, owned by the
/// dispatcher, written only by the reducer. Map order is irrelevant; list
/// ordering is derived by the selectors.
#[derive(Debug, Clone)]
pub struct TodoState {
    pub todos: HashMap<TodoId, Todo>,
    pub status: LoadStatus,
    pub error: Option<String>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            todos: HashMap::new(),
            status: LoadStatus::Idle,
            error: None,
        }
    }

    /// Replace the entire collection, keeping status/error for the reducer
    /// to manage.
    pub fn set_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos
            .into_iter()
            .map(|todo| (todo.id.clone(), todo))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
