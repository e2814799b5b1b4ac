//! Test helper module for isolated repository tests
//!
//! Every context owns its own factory, so tests never observe each other's
//! rows and no cleanup is needed.

use std::path::PathBuf;
use uuid::Uuid;

use crate::repository::factory::{LocalRepoFactory, LocalRepositories};

/// Test context holding repositories over private tables
pub struct TestContext {
    pub repos: LocalRepositories,
}

impl TestContext {
    /// Get the repositories from the context
    pub fn repos(&self) -> &LocalRepositories {
        &self.repos
    }
}

/// Setup a test context over empty tables
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context();
///     let order_repo = &ctx.repos().order_repository;
///     // Perform test operations...
///     Ok(())
/// }
/// ```
pub fn setup_test_context() -> TestContext {
    TestContext {
        repos: LocalRepoFactory::new().build_all_repos(),
    }
}

/// Setup a test context whose tables hold the demo data
pub async fn setup_seeded_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let factory = LocalRepoFactory::with_mock_data().await?;
    Ok(TestContext {
        repos: factory.build_all_repos(),
    })
}

/// A fresh directory path for file backed session tests. The directory is
/// not created.
pub fn temp_storage_dir() -> PathBuf {
    std::env::temp_dir().join(format!("trackit-test-{}", Uuid::new_v4()))
}
