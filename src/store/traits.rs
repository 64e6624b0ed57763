// ProfileStore trait: the capability interface for profile persistence.
//
// The analysis pipeline never touches storage; the presentation layer
// holds a store and decides when to load or save. Implementors:
// SqliteStore. Everything is synchronous: one logical writer per session
// and one bounded record leave no reason for an async runtime.

use anyhow::Result;

use crate::models::StoredProfile;

pub trait ProfileStore: Send + Sync {
    /// Load the saved profile.
    ///
    /// Returns None when the slot is empty or its content fails to
    /// deserialize. Malformed content is treated as absence, never
    /// surfaced as an error.
    fn load(&self) -> Result<Option<StoredProfile>>;

    /// Overwrite the slot with the given profile, wholesale. No partial
    /// update, no merge.
    fn save(&self, profile: &StoredProfile) -> Result<()>;
}
