//! In-process turn store
//!
//! Keeps serialized state as JSON values, one entry per key, the same shape
//! a document store would hold.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::traits::TurnStore;
use super::{conversation_key, profile_key};
use crate::error::{Error, Result};
use crate::models::{ConversationState, UserProfile};

/// Turn store backed by a map in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, Value>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Storage("memory store mutex poisoned".to_string()))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let value = self.entries()?.get(key).cloned();
        match value {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: String, item: &T) -> Result<()> {
        let value = serde_json::to_value(item)?;
        self.entries()?.insert(key, value);
        Ok(())
    }

    /// Raw stored value (for diagnostics and tests)
    pub fn raw(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries()?.get(key).cloned())
    }

    /// Overwrite a raw stored value
    pub fn put_raw(&self, key: &str, value: Value) -> Result<()> {
        self.entries()?.insert(key.to_string(), value);
        Ok(())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TurnStore for MemoryStore {
    fn load_conversation(&self, conversation_id: &str) -> Result<Option<ConversationState>> {
        self.read(&conversation_key(conversation_id))
    }

    fn save_conversation(&self, conversation_id: &str, state: &ConversationState) -> Result<()> {
        self.write(conversation_key(conversation_id), state)
    }

    fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.read(&profile_key(user_id))
    }

    fn save_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        self.write(profile_key(user_id), profile)
    }
}
