pub mod create_batch;
pub mod find_by_order_id;
pub mod repo_impl;

pub use repo_impl::TrackingEventRepositoryImpl;
