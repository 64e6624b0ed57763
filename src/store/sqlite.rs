// SqliteStore: rusqlite backend implementing the ProfileStore trait.
//
// The Connection sits behind a std Mutex; every call locks, does its
// synchronous work, and returns. The lock is never held across anything
// slow, since each operation is a single statement.

use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use super::traits::ProfileStore;
use crate::models::StoredProfile;

/// The fixed key the profile record lives under.
pub const STORAGE_KEY: &str = "algombti.profile";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn get_slot(&self, key: &str) -> Result<Option<String>> {
        // A poisoned lock still holds a usable connection
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut stmt = conn.prepare("SELECT value FROM profile_slots WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    fn set_slot(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO profile_slots (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

impl ProfileStore for SqliteStore {
    fn load(&self) -> Result<Option<StoredProfile>> {
        let Some(raw) = self.get_slot(STORAGE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(error) => {
                warn!(%error, "Failed to parse stored profile; treating slot as empty");
                Ok(None)
            }
        }
    }

    fn save(&self, profile: &StoredProfile) -> Result<()> {
        let json = serde_json::to_string(profile).context("Failed to serialize profile")?;
        self.set_slot(STORAGE_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_input;
    use crate::models::Platform;
    use crate::store::schema::create_tables;

    fn test_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteStore::new(conn)
    }

    fn test_profile() -> StoredProfile {
        StoredProfile::new(analyze_input(
            "lofi playlist lofi 코딩 튜토리얼",
            Platform::YouTube,
        ))
    }

    #[test]
    fn test_load_empty_slot() {
        let store = test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = test_store();
        let profile = test_profile();
        store.save(&profile).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = test_store();
        let first = test_profile();
        store.save(&first).unwrap();

        let mut second = StoredProfile::new(analyze_input("재즈 재즈 러닝", Platform::Spotify));
        second.is_public = true;
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, second);
        assert_ne!(loaded.result.platform, first.result.platform);
    }

    #[test]
    fn test_flag_toggles_persist() {
        let store = test_store();
        let mut profile = test_profile();
        store.save(&profile).unwrap();

        profile.allow_sensitive = true;
        profile.is_public = true;
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.allow_sensitive);
        assert!(loaded.is_public);
    }

    #[test]
    fn test_malformed_slot_treated_as_empty() {
        let store = test_store();
        store.set_slot(STORAGE_KEY, "{not valid json").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
