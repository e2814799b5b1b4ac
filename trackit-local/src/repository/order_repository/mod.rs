pub mod create_batch;
pub mod exist_by_ids;
pub mod find_by_customer_id;
pub mod find_by_tracking_number;
pub mod list;
pub mod load_batch;
pub mod repo_impl;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::OrderRepositoryImpl;
