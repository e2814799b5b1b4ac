use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking existence of multiple entities by their IDs
///
/// Returns a vector of tuples where each tuple contains the UUID and a boolean indicating existence.
#[async_trait]
pub trait ExistByIds: Send + Sync {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
