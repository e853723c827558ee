//! Note data model
//!
//! `Draft` is the in-progress form content owned by the note form. A `Note` is
//! only ever built from a draft that passed validation.

use chrono::{DateTime, Utc};

use crate::utils::generate_note_id;
use crate::utils::validation::{validate_draft, DraftError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// Variants in the order they are offered in the form
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "High" => Priority::High,
            "Low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "🔴 High",
            Priority::Medium => "🟡 Medium",
            Priority::Low => "🟢 Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Work,
    Personal,
    Ideas,
}

impl Default for Category {
    fn default() -> Self {
        Category::Work
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Ideas];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Ideas => "Ideas",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Personal" => Category::Personal,
            "Ideas" => Category::Ideas,
            _ => Category::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "📂 Work",
            Category::Personal => "🏠 Personal",
            Category::Ideas => "💡 Ideas",
        }
    }
}

/// Name of an editable draft field, as carried by the input's `name` attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Priority,
    Category,
    Description,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Priority => "priority",
            DraftField::Category => "category",
            DraftField::Description => "description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DraftField::Title),
            "priority" => Some(DraftField::Priority),
            "category" => Some(DraftField::Category),
            "description" => Some(DraftField::Description),
            _ => None,
        }
    }
}

/// Unsubmitted form content
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub priority: Priority,
    pub category: Category,
    pub description: String,
}

impl Draft {
    /// Overwrite a single field. Enum fields parse leniently and fall back to
    /// their default for unknown values.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Priority => self.priority = Priority::from_str(&value),
            DraftField::Category => self.category = Category::from_str(&value),
            DraftField::Description => self.description = value,
        }
    }

    /// Current value of a field as it is shown in its input
    pub fn field_value(&self, field: DraftField) -> String {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Priority => self.priority.as_str().to_string(),
            DraftField::Category => self.category.as_str().to_string(),
            DraftField::Description => self.description.clone(),
        }
    }
}

/// A finalized note record
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub category: Category,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Build a note from a draft, assigning a fresh id and creation time.
    pub fn from_draft(draft: &Draft) -> Result<Self, DraftError> {
        validate_draft(draft)?;

        Ok(Note {
            id: generate_note_id(),
            title: draft.title.clone(),
            priority: draft.priority,
            category: draft.category,
            description: draft.description.clone(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = Draft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.category, Category::Work);
        assert_eq!(draft.description, "");
    }

    #[test]
    fn test_enum_names() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_str(priority.as_str()), priority);
        }
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), category);
        }
        assert_eq!(Priority::from_str("Urgent"), Priority::Medium);
        assert_eq!(Category::from_str(""), Category::Work);
        assert_eq!(Priority::High.label(), "🔴 High");
        assert_eq!(Category::Ideas.label(), "💡 Ideas");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(DraftField::from_name("title"), Some(DraftField::Title));
        assert_eq!(DraftField::from_name("category"), Some(DraftField::Category));
        assert_eq!(DraftField::from_name("Title"), None);
        assert_eq!(DraftField::Description.name(), "description");
    }

    #[test]
    fn test_set_field_only_touches_one_field() {
        let mut draft = Draft {
            title: "Groceries".to_string(),
            description: "Buy milk".to_string(),
            ..Draft::default()
        };

        draft.set_field(DraftField::Priority, "High".to_string());

        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.category, Category::Work);
        assert_eq!(draft.description, "Buy milk");
        assert_eq!(draft.field_value(DraftField::Priority), "High");
    }

    #[test]
    fn test_note_from_draft() {
        let draft = Draft {
            title: "Groceries".to_string(),
            description: "Buy milk".to_string(),
            ..Draft::default()
        };

        let note = Note::from_draft(&draft).unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.priority, Priority::Medium);
        assert_eq!(note.category, Category::Work);
        assert_eq!(note.description, "Buy milk");
        assert!(!note.id.is_empty());
    }

    #[test]
    fn test_note_from_empty_draft_fails() {
        assert_eq!(
            Note::from_draft(&Draft::default()),
            Err(DraftError::MissingTitleAndDescription)
        );
    }
}
