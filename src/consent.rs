//! Cookie-consent preference store.
//!
//! One JSON document under a fixed key, read on page load, replaced on
//! every decision. Single reader/writer, no locking; an unreadable or
//! unparsable record is treated as "never decided" and never surfaces as
//! an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed storage key the browser build has always used.
pub const STORAGE_KEY: &str = "cookie-consent";

/// The persisted tri-flag permission set. `necessary` is always-on and not
/// user-editable; the other two default to opt-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for ConsentPreferences {
    fn default() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
        }
    }
}

impl ConsentPreferences {
    /// "Accept all" decision shortcut.
    pub fn accept_all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
        }
    }

    /// "Reject all" decision shortcut. Necessary stays on.
    pub fn reject_all() -> Self {
        Self::default()
    }

    /// Recorded preferences always carry `necessary = true`, whatever the
    /// caller or the stored bytes said.
    fn normalized(mut self) -> Self {
        self.necessary = true;
        self
    }
}

/// File-backed store holding the single consent record.
#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
}

impl ConsentStore {
    /// Store rooted at `dir`; the record lives in `<dir>/cookie-consent.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record. `None` means no decision was ever
    /// recorded — including when the stored value fails to parse.
    pub fn load(&self) -> Option<ConsentPreferences> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<ConsentPreferences>(&raw) {
            Ok(prefs) => Some(prefs.normalized()),
            Err(e) => {
                warn!("Ignoring unparsable consent record: {}", e);
                None
            }
        }
    }

    /// Whether the decision banner should be shown: only while no valid
    /// record exists.
    pub fn needs_decision(&self) -> bool {
        self.load().is_none()
    }

    /// Persist a decision, replacing any prior record.
    pub fn save(&self, prefs: &ConsentPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(&prefs.normalized())?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Convenience shortcuts mirroring the banner buttons.
    pub fn accept_all(&self) -> Result<ConsentPreferences> {
        let prefs = ConsentPreferences::accept_all();
        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn reject_all(&self) -> Result<ConsentPreferences> {
        let prefs = ConsentPreferences::reject_all();
        self.save(&prefs)?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Record Shape ====================

    #[test]
    fn test_default_is_necessary_only() {
        let prefs = ConsentPreferences::default();
        assert!(prefs.necessary);
        assert!(!prefs.analytics);
        assert!(!prefs.marketing);
    }

    #[test]
    fn test_accept_all_sets_everything() {
        let prefs = ConsentPreferences::accept_all();
        assert!(prefs.necessary && prefs.analytics && prefs.marketing);
    }

    #[test]
    fn test_reject_all_keeps_necessary() {
        let prefs = ConsentPreferences::reject_all();
        assert!(prefs.necessary);
        assert!(!prefs.analytics && !prefs.marketing);
    }

    #[test]
    fn test_json_shape_matches_browser_record() {
        let prefs = ConsentPreferences {
            necessary: true,
            analytics: true,
            marketing: false,
        };
        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"necessary": true, "analytics": true, "marketing": false})
        );
    }

    // ==================== Store ====================

    #[test]
    fn test_load_absent_returns_none() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path());
        assert!(store.load().is_none());
        assert!(store.needs_decision());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path());

        let prefs = ConsentPreferences {
            necessary: true,
            analytics: true,
            marketing: false,
        };
        store.save(&prefs).expect("save");

        assert_eq!(store.load(), Some(prefs));
        assert!(!store.needs_decision());
    }

    #[test]
    fn test_save_replaces_prior_record() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path());

        store.accept_all().expect("accept");
        store.reject_all().expect("reject");

        let loaded = store.load().expect("record");
        assert!(!loaded.analytics);
        assert!(!loaded.marketing);
    }

    #[test]
    fn test_unparsable_record_reads_as_absent() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path());

        std::fs::write(store.path(), "{not json at all").expect("write");

        assert!(store.load().is_none());
        assert!(store.needs_decision());
    }

    #[test]
    fn test_load_normalizes_necessary_flag() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path());

        // Hand-edited record with necessary switched off
        std::fs::write(
            store.path(),
            r#"{"necessary": false, "analytics": true, "marketing": true}"#,
        )
        .expect("write");

        let loaded = store.load().expect("record");
        assert!(loaded.necessary);
        assert!(loaded.analytics);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConsentStore::new(dir.path().join("nested/state"));

        store.save(&ConsentPreferences::accept_all()).expect("save");
        assert!(store.path().exists());
    }

    #[test]
    fn test_storage_key_is_stable() {
        let store = ConsentStore::new("/tmp/example");
        assert!(store.path().ends_with("cookie-consent.json"));
    }
}
