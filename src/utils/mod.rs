// Utility functions
// Note model, validation and formatting helpers

pub mod note;
pub mod time;
pub mod validation;

pub use note::{Category, Draft, DraftField, Note, Priority};
pub use time::{format_datetime, format_relative_time};
pub use validation::DraftError;

/// Generate a unique note identifier (random UUID v4)
pub fn generate_note_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_note_id() {
        let a = generate_note_id();
        let b = generate_note_id();
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }
}
