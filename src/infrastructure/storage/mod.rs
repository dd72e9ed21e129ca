//! In-memory preference storage
//!
//! Language choices live for the lifetime of the process and are lost on
//! restart. The RwLock keeps concurrent reads cheap while same-user writes
//! stay atomic.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::entities::LanguageCode;
use crate::domain::traits::PreferenceStore;

pub struct MemoryPreferenceStore {
    languages: RwLock<HashMap<String, LanguageCode>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            languages: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn language(&self, user_id: &str) -> Result<Option<LanguageCode>, StorageError> {
        let languages = self.languages.read().await;
        Ok(languages.get(user_id).copied())
    }

    async fn set_language(&self, user_id: &str, code: LanguageCode) -> Result<(), StorageError> {
        let mut languages = self.languages.write().await;
        languages.insert(user_id.to_string(), code);
        Ok(())
    }
}
