use std::sync::Arc;
use trackit_api::{ApiError, ApiResult};
use trackit_db::repository::session_store::SessionStore;

use crate::config::TrackItConfig;
use crate::repository::factory::LocalRepoFactory;
use crate::service::{MockAuthService, OrderService, TrackingService};
use crate::session::FileSessionStore;

/// The services of one running application, wired over the seeded tables
/// and a file backed session store.
pub struct LocalServices {
    pub auth: Arc<MockAuthService>,
    pub orders: Arc<OrderService>,
    pub tracking: Arc<TrackingService>,
}

impl LocalServices {
    /// Seeds the tables, opens the session store and restores any session
    /// left by a previous run.
    pub async fn bootstrap(config: TrackItConfig) -> ApiResult<Self> {
        let factory = LocalRepoFactory::with_mock_data()
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        let repos = factory.build_all_repos();

        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(
            config.storage_dir.clone(),
            config.session_key.clone(),
        ));
        let auth = Arc::new(MockAuthService::new(
            repos.user_repository.clone(),
            store,
            config.simulated_latency,
        ));
        auth.restore().await;

        tracing::info!(storage_dir = %config.storage_dir.display(), "local services ready");

        Ok(Self {
            auth,
            orders: Arc::new(OrderService::new(repos.order_repository.clone())),
            tracking: Arc::new(TrackingService::new(
                repos.order_repository,
                repos.tracking_event_repository,
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::temp_storage_dir;
    use std::error::Error;
    use trackit_api::{resolve_dashboard, AuthService, Dashboard, DashboardRoute, LoginRequest};

    fn test_config() -> TrackItConfig {
        TrackItConfig {
            storage_dir: temp_storage_dir(),
            ..TrackItConfig::default()
        }
    }

    #[tokio::test]
    async fn test_session_survives_restart() -> Result<(), Box<dyn Error + Send + Sync>> {
        let config = test_config();

        let first = LocalServices::bootstrap(config.clone()).await?;
        assert!(!first.auth.is_authenticated().await);
        first.auth.login(LoginRequest::new("admin@trackit.com", "pw")).await?;

        let second = LocalServices::bootstrap(config.clone()).await?;
        let user = second.auth.current_user().await;
        assert_eq!(
            resolve_dashboard(user.as_ref()),
            DashboardRoute::Show(Dashboard::Admin)
        );

        second.auth.logout().await?;
        let third = LocalServices::bootstrap(config.clone()).await?;
        assert_eq!(third.auth.current_user().await, None);

        tokio::fs::remove_dir_all(&config.storage_dir).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_services_share_seeded_tables() -> Result<(), Box<dyn Error + Send + Sync>> {
        let services = LocalServices::bootstrap(test_config()).await?;

        assert_eq!(services.orders.stats().await?.total, 4);
        let details = services.tracking.tracking_details("TRK123456789").await?;
        assert_eq!(details.events.len(), 6);

        Ok(())
    }
}
