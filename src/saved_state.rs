//! In-memory saved-state registry.
//!
//! Screens park small pieces of state here before recreation and read them
//! back after, keyed by string. Values are JSON-encoded at save time so the
//! registry has no generic parameters and can hold heterogeneous slots.
//! This is ephemeral in-process state only; nothing touches disk.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when saving or restoring a state slot.
#[derive(Debug, Error)]
pub enum SavedStateError {
    #[error("failed to encode state for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode state for key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed store of serialized state slots.
///
/// Saving to an existing key overwrites it. Restoring a missing key is not
/// an error: the caller falls back to its initial state, exactly as on
/// first creation.
#[derive(Debug, Clone, Default)]
pub struct SavedStateRegistry {
    slots: HashMap<String, serde_json::Value>,
}

impl SavedStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `value` into the slot for `key`, replacing any previous
    /// contents.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SavedStateError> {
        let encoded = serde_json::to_value(value).map_err(|source| SavedStateError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.slots.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Decodes the slot for `key`, or `None` if nothing was saved there.
    ///
    /// # Errors
    /// Fails with [`SavedStateError::Decode`] when a slot exists but does
    /// not decode as `T`, surfacing the mismatch instead of masking it.
    pub fn restore<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SavedStateError> {
        let Some(slot) = self.slots.get(key) else {
            return Ok(None);
        };

        serde_json::from_value(slot.clone())
            .map(Some)
            .map_err(|source| SavedStateError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Drops the slot for `key`. Returns whether a slot existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.slots.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_previous_slot() {
        let mut registry = SavedStateRegistry::new();
        registry.save("count", &1u32).unwrap();
        registry.save("count", &5u32).unwrap();
        assert_eq!(registry.restore::<u32>("count").unwrap(), Some(5));
    }

    #[test]
    fn remove_reports_whether_slot_existed() {
        let mut registry = SavedStateRegistry::new();
        registry.save("count", &1u32).unwrap();
        assert!(registry.remove("count"));
        assert!(!registry.remove("count"));
        assert!(registry.is_empty());
    }
}
