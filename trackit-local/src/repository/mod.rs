pub mod factory;
pub mod order_repository;
pub mod tracking_event_repository;
pub mod user_repository;

use parking_lot::RwLock as ParkingRwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub use factory::{LocalRepoFactory, LocalRepositories};
pub use order_repository::OrderRepositoryImpl;
pub use tracking_event_repository::TrackingEventRepositoryImpl;
pub use user_repository::UserRepositoryImpl;

/// Rows of one in-memory table keyed by id, shared by every repository
/// built from the same factory.
pub type Table<T> = Arc<ParkingRwLock<HashMap<Uuid, T>>>;

/// Shared index cache for one table.
pub type SharedIdxCache<T> = Arc<ParkingRwLock<trackit_db::IdxModelCache<T>>>;
