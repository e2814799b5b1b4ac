use async_trait::async_trait;
use std::error::Error;
use trackit_db::repository::exist_by_ids::ExistByIds;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

#[async_trait]
impl ExistByIds for OrderRepositoryImpl {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        let cache = self.order_idx_cache.read();
        Ok(ids
            .iter()
            .map(|id| (*id, cache.contains_primary_key(id)))
            .collect())
    }
}
