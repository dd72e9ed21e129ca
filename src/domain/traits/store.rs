use crate::application::errors::StorageError;
use crate::domain::entities::LanguageCode;
use async_trait::async_trait;

/// PreferenceStore trait - abstraction over where per-user language choices live
///
/// Entries are created or overwritten by the language selector and never
/// deleted. A missing entry means the user has not picked yet; callers fall
/// back to the configured default.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn language(&self, user_id: &str) -> Result<Option<LanguageCode>, StorageError>;

    async fn set_language(&self, user_id: &str, code: LanguageCode) -> Result<(), StorageError>;
}
