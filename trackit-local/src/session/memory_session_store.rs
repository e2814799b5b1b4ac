use async_trait::async_trait;
use parking_lot::Mutex;
use std::error::Error;
use trackit_api::SessionUser;
use trackit_db::repository::session_store::SessionStore;

use super::error::SessionStoreError;

/// Session store kept in process memory. The record is held in its
/// serialized form, like the file backed store.
pub struct InMemorySessionStore {
    key: String,
    record: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            record: Mutex::new(None),
        }
    }

    /// Replaces the stored record with raw text.
    pub fn put_raw(&self, raw: impl Into<String>) {
        *self.record.lock() = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.record.lock().clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Option<SessionUser>, Box<dyn Error + Send + Sync>> {
        let Some(raw) = self.raw() else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring unreadable session record");
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &SessionUser) -> Result<(), Box<dyn Error + Send + Sync>> {
        let raw = serde_json::to_string(user).map_err(SessionStoreError::from)?;
        self.put_raw(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.record.lock().take();
        Ok(())
    }
}
