/// Failures from the persistent slot itself.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serde: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Everything an effect handler can fail with. Never propagated as a panic:
/// the handler converts it into a failure intent carrying `to_string()`.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("todo not found")]
    NotFound,
    #[error("no todos to reorder")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn effect_error_messages_are_user_facing() {
        assert_eq!(EffectError::NotFound.to_string(), "todo not found");
        assert_eq!(EffectError::Empty.to_string(), "no todos to reorder");
    }

    #[test]
    fn storage_errors_pass_through_effect_error_display() {
        let err = EffectError::from(StorageError::Unavailable("slot offline".to_string()));
        assert_eq!(err.to_string(), "storage unavailable: slot offline");
    }
}
