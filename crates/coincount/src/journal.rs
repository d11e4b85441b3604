//! Journal file handling: the store snapshot on disk.

use anyhow::{Context, Result};
use coincount_store::MemoryStore;
use std::fs;
use std::path::Path;

/// Load the journal, or start an empty one if the file does not exist yet.
pub fn load(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        return Ok(MemoryStore::new());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read journal {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("journal {} is not a valid snapshot", path.display()))
}

/// Write the journal back to disk.
pub fn save(path: &Path, store: &MemoryStore) -> Result<()> {
    let data = serde_json::to_string_pretty(store)?;
    fs::write(path, data).with_context(|| format!("failed to write journal {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coincount_store::LedgerStore;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load(&dir.path().join("ledger.json")).unwrap();
        assert_eq!(store.next_transaction_id().unwrap(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let store = MemoryStore::new();
        save(&path, &store).unwrap();
        let restored = load(&path).unwrap();
        assert_eq!(restored.next_transaction_id().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();
        assert!(load(&path).is_err());
    }
}
