use dioxus::prelude::*;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// User interface preferences for the note form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormPrefs {
    /// Show the form expanded when the page loads
    #[serde(default)]
    pub start_expanded: bool,
    /// Show a message when a submit is rejected instead of ignoring it
    #[serde(default = "default_report_validation")]
    pub report_validation: bool,
}

fn default_report_validation() -> bool {
    true
}

impl Default for FormPrefs {
    fn default() -> Self {
        Self {
            start_expanded: false,
            report_validation: default_report_validation(),
        }
    }
}

/// Global preferences state, read from localStorage on first access
pub static PREFS: GlobalSignal<FormPrefs> = Signal::global(load_prefs);

const STORAGE_KEY: &str = "quicknotes_prefs";

fn load_prefs() -> FormPrefs {
    prefs_or_default(LocalStorage::get::<FormPrefs>(STORAGE_KEY))
}

/// Stored preferences, or defaults when the key is missing or unreadable
fn prefs_or_default(stored: Result<FormPrefs, StorageError>) -> FormPrefs {
    match stored {
        Ok(prefs) => {
            log::info!("Loaded preferences from storage: {:?}", prefs);
            prefs
        }
        Err(e) => {
            log::info!("Using default preferences ({})", e);
            FormPrefs::default()
        }
    }
}

/// Replace preferences and persist them to localStorage
pub fn set_prefs(prefs: FormPrefs) {
    if *PREFS.read() == prefs {
        return;
    }

    if let Err(e) = LocalStorage::set(STORAGE_KEY, &prefs) {
        log::warn!("Failed to save preferences: {}", e);
    }
    log::info!("Preferences changed to: {:?}", prefs);
    *PREFS.write() = prefs;
}

/// Get current preferences
pub fn get_prefs() -> FormPrefs {
    PREFS.read().clone()
}
