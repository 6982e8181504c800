use thiserror::Error;

use crate::strings;

pub const MAX_TITLE_LEN: usize = 100;

/// Reasons a section editor refuses to dispatch a save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", strings::SECTION_TITLE_REQUIRED_ERROR)]
    EmptyTitle,
    #[error("{} (got {})", strings::SECTION_TITLE_LENGTH_ERROR, .actual)]
    TitleTooLong { max: usize, actual: usize },
}

/// Checks a title the way the editor does before saving: trimmed, non-empty,
/// at most [`MAX_TITLE_LEN`] characters. Returns the trimmed title.
pub fn validate_title(title: &str) -> Result<&str, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong {
            max: MAX_TITLE_LEN,
            actual,
        });
    }
    Ok(trimmed)
}
