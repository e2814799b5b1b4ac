use async_trait::async_trait;

use crate::domain::session::{LoginRequest, SessionUser};
use crate::error::ApiResult;

/// Authentication boundary consumed by the views.
///
/// Implementations own the session state; callers never hold it
/// themselves and go through this trait for every read or change.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Signs a user in and persists the session.
    ///
    /// # Returns
    /// * `Ok(SessionUser)` - The user now signed in
    /// * `Err(ApiError::ValidationError)` - The request is malformed
    /// * `Err(ApiError::InvalidCredentials)` - No such user
    async fn login(&self, request: LoginRequest) -> ApiResult<SessionUser>;

    /// Ends the current session and removes the persisted record.
    async fn logout(&self) -> ApiResult<()>;

    async fn current_user(&self) -> Option<SessionUser>;

    async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }
}
