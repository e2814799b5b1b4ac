use async_trait::async_trait;
use trackit_api::SessionUser;

/// Durable home of the signed-in user between runs.
///
/// The record lives under a single fixed key. Loading happens once when a
/// session is restored, saving on login and clearing on logout.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Name of the key the record is stored under
    fn key(&self) -> &str;

    /// Reads the stored record
    ///
    /// # Returns
    /// * `Ok(Some(SessionUser))` - A readable record exists
    /// * `Ok(None)` - Nothing stored, or the stored record is unreadable
    /// * `Err` - The underlying storage failed
    async fn load(&self) -> Result<Option<SessionUser>, Box<dyn std::error::Error + Send + Sync>>;

    async fn save(&self, user: &SessionUser) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Removes the record. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
