use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, StorageError, STORAGE_FAVORITES, STORAGE_USER};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub pref: String,
    /// ISO-8601, UTC, millisecond precision.
    pub saved_at: String,
}

/// Overwrites the stored profile with `name`/`pref` and the current time.
pub fn save_user<S: KeyValueStore + ?Sized>(
    store: &mut S,
    name: &str,
    pref: &str,
) -> Result<UserProfile, StorageError> {
    let user = UserProfile {
        name: name.to_string(),
        pref: pref.to_string(),
        saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    storage::set_json(store, STORAGE_USER, &user)?;
    Ok(user)
}

pub fn load_user<S: KeyValueStore + ?Sized>(store: &S) -> Option<UserProfile> {
    storage::get_json(store, STORAGE_USER)
}

/// Removes the profile, then the favorites. The two writes are independent.
pub fn clear_saved_data<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    store.remove(STORAGE_USER)?;
    store.remove(STORAGE_FAVORITES)?;
    Ok(())
}
