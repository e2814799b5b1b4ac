pub mod create_batch;
pub mod find_by_email;
pub mod load;
pub mod repo_impl;

pub use repo_impl::UserRepositoryImpl;
