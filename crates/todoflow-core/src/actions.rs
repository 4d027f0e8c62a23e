use super::model::Todo;
use super::model::TodoChanges;
use super::model::TodoDraft;
use super::model::TodoId;

/// The closed set of intents the pipeline understands.
///
/// Request intents (`Load`, `Add`, `Update`, `Delete`, `Toggle`, `Reorder`)
/// come from the presentation layer; the success/failure intents are emitted
/// by the effect handlers, exactly one per request — except Toggle on a
/// missing id, which emits nothing at all.
///
/// There is no `ReorderFailure`: reorder errors surface as `UpdateFailure`.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Load,
    LoadSuccess { todos: Vec<Todo> },
    LoadFailure { error: String },

    Add { draft: TodoDraft },
    AddSuccess { todo: Todo },
    AddFailure { error: String },

    Update { id: TodoId, changes: TodoChanges },
    UpdateSuccess { todo: Todo },
    UpdateFailure { error: String },

    Delete { id: TodoId },
    DeleteSuccess { id: TodoId },
    DeleteFailure { error: String },

    Toggle { id: TodoId },
    ToggleSuccess { todo: Todo },
    ToggleFailure { error: String },

    Reorder { ids: Vec<TodoId>, completed: bool },
    ReorderSuccess { todos: Vec<Todo> },
}

impl TodoAction {
    /// Intent name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::LoadSuccess { .. } => "load-success",
            Self::LoadFailure { .. } => "load-failure",
            Self::Add { .. } => "add",
            Self::AddSuccess { .. } => "add-success",
            Self::AddFailure { .. } => "add-failure",
            Self::Update { .. } => "update",
            Self::UpdateSuccess { .. } => "update-success",
            Self::UpdateFailure { .. } => "update-failure",
            Self::Delete { .. } => "delete",
            Self::DeleteSuccess { .. } => "delete-success",
            Self::DeleteFailure { .. } => "delete-failure",
            Self::Toggle { .. } => "toggle",
            Self::ToggleSuccess { .. } => "toggle-success",
            Self::ToggleFailure { .. } => "toggle-failure",
            Self::Reorder { .. } => "reorder",
            Self::ReorderSuccess { .. } => "reorder-success",
        }
    }

    /// Failure intents carry the message to surface; everything else is None.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::LoadFailure { error }
            | Self::AddFailure { error }
            | Self::UpdateFailure { error }
            | Self::DeleteFailure { error }
            | Self::ToggleFailure { error } => Some(error.as_str()),
            _ => None,
        }
    }
}
