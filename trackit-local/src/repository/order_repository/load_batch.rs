use async_trait::async_trait;
use std::error::Error;
use trackit_db::models::order::OrderModel;
use trackit_db::repository::load_batch::LoadBatch;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &OrderRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<OrderModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let orders = repo.orders.read();
        Ok(ids.iter().map(|id| orders.get(id).cloned()).collect())
    }
}

#[async_trait]
impl LoadBatch<OrderModel> for OrderRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<OrderModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::order_repository::test_utils::create_test_order;
    use crate::test_helper::setup_test_context;
    use trackit_db::repository::{create_batch::CreateBatch, load_batch::LoadBatch};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let order_repo = &ctx.repos().order_repository;

        let orders: Vec<_> = (0..3).map(|n| create_test_order(&format!("TRK9100{n}"))).collect();
        let saved = order_repo.create_batch(orders).await?;

        let missing = Uuid::new_v4();
        let mut ids: Vec<Uuid> = saved.iter().map(|s| s.id).collect();
        ids.insert(1, missing);

        let loaded = order_repo.load_batch(&ids).await?;
        assert_eq!(loaded.len(), 4);
        assert!(loaded[1].is_none());
        assert_eq!(loaded[0].as_ref().map(|o| o.id), Some(saved[0].id));
        assert_eq!(loaded[3].as_ref().map(|o| o.id), Some(saved[2].id));

        Ok(())
    }
}
