//! Validation for note drafts.

use std::fmt;

use crate::utils::note::Draft;

/// Reason a draft cannot become a note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// Title is empty
    MissingTitle,
    /// Description is empty
    MissingDescription,
    /// Both required fields are empty
    MissingTitleAndDescription,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Please enter a title"),
            Self::MissingDescription => write!(f, "Please enter a description"),
            Self::MissingTitleAndDescription => {
                write!(f, "Please enter a title and a description")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Check that the required draft fields are filled in.
pub fn validate_draft(draft: &Draft) -> Result<(), DraftError> {
    let has_title = !draft.title.is_empty();
    let has_description = !draft.description.is_empty();

    match (has_title, has_description) {
        (true, true) => Ok(()),
        (false, true) => Err(DraftError::MissingTitle),
        (true, false) => Err(DraftError::MissingDescription),
        (false, false) => Err(DraftError::MissingTitleAndDescription),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> Draft {
        Draft {
            title: title.to_string(),
            description: description.to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn test_validate_draft() {
        assert_eq!(validate_draft(&draft("Groceries", "Buy milk")), Ok(()));
        assert_eq!(validate_draft(&draft("", "Buy milk")), Err(DraftError::MissingTitle));
        assert_eq!(validate_draft(&draft("Groceries", "")), Err(DraftError::MissingDescription));
        assert_eq!(validate_draft(&draft("", "")), Err(DraftError::MissingTitleAndDescription));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert_eq!(validate_draft(&draft(" ", "Buy milk")), Ok(()));
        assert_eq!(validate_draft(&draft("Groceries", "\n\t")), Ok(()));
        assert_eq!(validate_draft(&draft("", " ")), Err(DraftError::MissingTitle));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DraftError::MissingTitle.to_string(), "Please enter a title");
        assert_eq!(
            DraftError::MissingTitleAndDescription.to_string(),
            "Please enter a title and a description"
        );
    }
}
