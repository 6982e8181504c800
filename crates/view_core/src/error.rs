use shared::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("section editing is only available in edit mode")]
    ReadOnly,
    #[error("no section editor is open")]
    NotEditing,
    #[error("a save is already in progress for this editor")]
    AlreadySaving,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum SaveQueueError {
    #[error("save queue worker has stopped")]
    Closed,
}
