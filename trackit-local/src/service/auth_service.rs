use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use trackit_api::{ApiError, ApiResult, AuthService, LoginRequest, SessionState, SessionUser};
use trackit_db::repository::session_store::SessionStore;
use validator::Validate;

use crate::repository::UserRepositoryImpl;

/// Authentication against the mock user directory.
///
/// The service owns the session state. Every change to it is mirrored into
/// the session store so that [`MockAuthService::restore`] can pick it up on
/// the next start.
pub struct MockAuthService {
    users: Arc<UserRepositoryImpl>,
    store: Arc<dyn SessionStore>,
    state: RwLock<SessionState>,
    simulated_latency: Duration,
}

impl MockAuthService {
    pub fn new(
        users: Arc<UserRepositoryImpl>,
        store: Arc<dyn SessionStore>,
        simulated_latency: Duration,
    ) -> Self {
        Self {
            users,
            store,
            state: RwLock::new(SessionState::default()),
            simulated_latency,
        }
    }

    /// Loads the persisted session into the in-process state.
    ///
    /// A store that cannot be read is treated as holding no session.
    pub async fn restore(&self) -> Option<SessionUser> {
        let restored = match self.store.load().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(key = self.store.key(), error = %e, "could not restore session");
                None
            }
        };

        if let Some(user) = &restored {
            tracing::info!(email = %user.email, role = %user.role, "session restored");
        }
        *self.state.write().await = SessionState::new(restored.clone());
        restored
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, request: LoginRequest) -> ApiResult<SessionUser> {
        request.validate()?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        let Some(model) = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(ApiError::storage)?
        else {
            tracing::warn!(email = %request.email, "login rejected: unknown email");
            return Err(ApiError::InvalidCredentials);
        };

        let user = SessionUser::from(&model);
        self.store.save(&user).await.map_err(ApiError::storage)?;
        self.state.write().await.sign_in(user.clone());

        tracing::info!(email = %user.email, role = %user.role, "signed in");
        Ok(user)
    }

    async fn logout(&self) -> ApiResult<()> {
        // A failed clear leaves the session intact.
        self.store.clear().await.map_err(ApiError::storage)?;
        let previous = self.state.write().await.sign_out();

        if let Some(user) = previous {
            tracing::info!(email = %user.email, "signed out");
        }
        Ok(())
    }

    async fn current_user(&self) -> Option<SessionUser> {
        self.state.read().await.user().cloned()
    }
}
