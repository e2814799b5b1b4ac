pub mod config;
pub mod local_services;
pub mod mock_data;
pub mod repository;
pub mod service;
pub mod session;

pub use config::TrackItConfig;
pub use local_services::LocalServices;
pub use repository::factory::{LocalRepoFactory, LocalRepositories};

#[cfg(test)]
pub mod test_helper;
