//! Key-value persistence seam standing in for browser local storage.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded writing `{key}` ({needed} bytes, {limit} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("storage rejected write to `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// String key-value storage with synchronous write-then-return semantics.
pub trait KeyValueStore {
    /// Stored value for `key`. Read failures are reported as absence.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, optionally with a size limit to mimic a storage quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    limit: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any write whose value is longer than `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            limit: Some(limit),
        }
    }

    /// Store pre-seeded with one raw value, e.g. left by an older session.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.limit {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed: value.len(),
                    limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() -> Result<(), StoreError> {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v1")?;
        store.set("k", "v2")?;

        assert_eq!(store.get("k").as_deref(), Some("v2"));
        Ok(())
    }

    #[test]
    fn limit_rejects_large_values_and_keeps_old_one() -> Result<(), StoreError> {
        let mut store = MemoryStore::with_limit(4);
        store.set("k", "1234")?;

        let result = store.set("k", "12345");

        assert!(matches!(
            result,
            Err(StoreError::QuotaExceeded {
                needed: 5,
                limit: 4,
                ..
            })
        ));
        assert_eq!(store.get("k").as_deref(), Some("1234"));
        Ok(())
    }
}
