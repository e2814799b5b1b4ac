use parking_lot::RwLock as ParkingRwLock;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use trackit_db::models::order::{OrderIdxModel, OrderModel};
use trackit_db::models::tracking_event::{TrackingEventIdxModel, TrackingEventModel};
use trackit_db::models::user::{UserIdxModel, UserModel};
use trackit_db::repository::create_batch::CreateBatch;
use trackit_db::IdxModelCache;

use super::order_repository::OrderRepositoryImpl;
use super::tracking_event_repository::TrackingEventRepositoryImpl;
use super::user_repository::UserRepositoryImpl;
use super::{SharedIdxCache, Table};
use crate::mock_data;

fn new_table<T>() -> Table<T> {
    Arc::new(ParkingRwLock::new(HashMap::new()))
}

fn new_idx_cache<T>() -> SharedIdxCache<T> {
    Arc::new(ParkingRwLock::new(IdxModelCache::default()))
}

/// Factory for the local repositories
///
/// Holds the tables and index caches so that every repository it builds
/// sees the same data. Use one instance per application.
pub struct LocalRepoFactory {
    users: Table<UserModel>,
    user_idx_cache: SharedIdxCache<UserIdxModel>,
    orders: Table<OrderModel>,
    order_idx_cache: SharedIdxCache<OrderIdxModel>,
    tracking_events: Table<TrackingEventModel>,
    tracking_event_idx_cache: SharedIdxCache<TrackingEventIdxModel>,
}

impl LocalRepoFactory {
    /// Create a factory over empty tables
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            users: new_table(),
            user_idx_cache: new_idx_cache(),
            orders: new_table(),
            order_idx_cache: new_idx_cache(),
            tracking_events: new_table(),
            tracking_event_idx_cache: new_idx_cache(),
        })
    }

    /// Create a factory whose tables hold the demo users, orders and
    /// tracking history
    pub async fn with_mock_data() -> Result<Arc<Self>, Box<dyn Error + Send + Sync>> {
        let factory = Self::new();
        let repos = factory.build_all_repos();

        let users = repos.user_repository.create_batch(mock_data::users()?).await?;
        let orders = repos.order_repository.create_batch(mock_data::orders()?).await?;
        let events = repos
            .tracking_event_repository
            .create_batch(mock_data::tracking_events()?)
            .await?;
        tracing::info!(
            users = users.len(),
            orders = orders.len(),
            tracking_events = events.len(),
            "seeded mock data"
        );

        Ok(factory)
    }

    pub fn build_user_repo(&self) -> Arc<UserRepositoryImpl> {
        Arc::new(UserRepositoryImpl::new(
            self.users.clone(),
            self.user_idx_cache.clone(),
        ))
    }

    pub fn build_order_repo(&self) -> Arc<OrderRepositoryImpl> {
        Arc::new(OrderRepositoryImpl::new(
            self.orders.clone(),
            self.order_idx_cache.clone(),
        ))
    }

    pub fn build_tracking_event_repo(&self) -> Arc<TrackingEventRepositoryImpl> {
        Arc::new(TrackingEventRepositoryImpl::new(
            self.tracking_events.clone(),
            self.tracking_event_idx_cache.clone(),
        ))
    }

    pub fn build_all_repos(&self) -> LocalRepositories {
        LocalRepositories {
            user_repository: self.build_user_repo(),
            order_repository: self.build_order_repo(),
            tracking_event_repository: self.build_tracking_event_repo(),
        }
    }
}

/// Container for all local repositories
#[derive(Clone)]
pub struct LocalRepositories {
    pub user_repository: Arc<UserRepositoryImpl>,
    pub order_repository: Arc<OrderRepositoryImpl>,
    pub tracking_event_repository: Arc<TrackingEventRepositoryImpl>,
}
