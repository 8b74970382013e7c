use crate::storage::{self, KeyValueStore, StorageError, STORAGE_FAVORITES};

/// Loads the favorite tip ids in insertion order.
///
/// Absent or malformed data is an empty list. Duplicate ids written by
/// another client are dropped, keeping the first occurrence.
pub fn load_favorites<S: KeyValueStore + ?Sized>(store: &S) -> Vec<u32> {
    let raw: Vec<u32> = storage::get_json(store, STORAGE_FAVORITES).unwrap_or_default();
    let mut out: Vec<u32> = Vec::with_capacity(raw.len());
    for id in raw {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Adds `id` if absent (appended) or removes it in place, then persists the list.
pub fn toggle_favorite<S: KeyValueStore + ?Sized>(
    store: &mut S,
    id: u32,
) -> Result<Vec<u32>, StorageError> {
    let mut favorites = load_favorites(&*store);
    if let Some(pos) = favorites.iter().position(|&f| f == id) {
        favorites.remove(pos);
    } else {
        favorites.push(id);
    }
    storage::set_json(store, STORAGE_FAVORITES, &favorites)?;
    Ok(favorites)
}
