use crate::storage::{KeyValueStore, StorageError, STORAGE_REVIEW_COUNT};

/// Reads the counter. Integer-valued floats such as `4.0` or `1e2` are accepted;
/// anything else counts as zero.
pub fn load_review_count<S: KeyValueStore + ?Sized>(store: &S) -> u64 {
    store
        .get(STORAGE_REVIEW_COUNT)
        .and_then(|raw| parse_count(raw.trim()))
        .unwrap_or(0)
}

fn parse_count(raw: &str) -> Option<u64> {
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n);
    }
    let n = raw.parse::<f64>().ok()?;
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then_some(n as u64)
}

/// Adds one to the stored counter and returns the new value.
pub fn increment_review_count<S: KeyValueStore + ?Sized>(
    store: &mut S,
) -> Result<u64, StorageError> {
    let now = load_review_count(&*store).saturating_add(1);
    store.set(STORAGE_REVIEW_COUNT, &now.to_string())?;
    Ok(now)
}
