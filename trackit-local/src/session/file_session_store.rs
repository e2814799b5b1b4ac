use async_trait::async_trait;
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use trackit_api::SessionUser;
use trackit_db::repository::session_store::SessionStore;

use super::error::SessionStoreError;

/// Session store persisting the signed-in user as `<dir>/<key>.json`.
pub struct FileSessionStore {
    dir: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_record(&self) -> Result<Option<String>, SessionStoreError> {
        match tokio::fs::read_to_string(self.path()).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_record(&self, user: &SessionUser) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string(user)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write then rename so a crash never leaves a half written record.
        let staging = self.dir.join(format!("{}.json.tmp", self.key));
        tokio::fs::write(&staging, raw).await?;
        tokio::fs::rename(&staging, self.path()).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Option<SessionUser>, Box<dyn Error + Send + Sync>> {
        let Some(raw) = self.read_record().await? else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "ignoring unreadable session record");
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &SessionUser) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_record(user).await?;
        tracing::debug!(key = %self.key, "session saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        match tokio::fs::remove_file(self.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::from(e).into()),
        }
    }
}
