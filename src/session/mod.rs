//! Session-scoped key/value storage.
//!
//! Entries live as long as the terminal session. The store is handed to
//! whoever needs it; nothing reaches for a global.

mod file;

use std::cell::RefCell;
use std::collections::BTreeMap;

use thiserror::Error;

pub use file::{FileStore, ensure_private_dir, session_dir};

/// Key holding the checkbox selection as a JSON object.
pub const CHECKBOX_STATE_KEY: &str = "checkboxState";
/// Key holding `"true"`/`"false"` for the dismissed intro.
pub const INTRO_HIDDEN_KEY: &str = "isIntroHidden";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed session data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-process store. Lives exactly as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[cfg(test)]
    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_entries() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set(INTRO_HIDDEN_KEY, "true").unwrap();
        assert_eq!(store.get(INTRO_HIDDEN_KEY).unwrap().as_deref(), Some("true"));

        store.set(INTRO_HIDDEN_KEY, "false").unwrap();
        assert_eq!(store.get(INTRO_HIDDEN_KEY).unwrap().as_deref(), Some("false"));

        store.remove(INTRO_HIDDEN_KEY).unwrap();
        assert_eq!(store.get(INTRO_HIDDEN_KEY).unwrap(), None);
    }

    #[test]
    fn memory_store_clear_drops_everything() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), None);
    }
}
