use async_trait::async_trait;
use std::collections::HashSet;
use std::error::Error;
use trackit_db::models::{order::OrderModel, IndexAware};
use trackit_db::repository::create_batch::CreateBatch;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &OrderRepositoryImpl,
        items: Vec<OrderModel>,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // Lock order: rows, then index.
        let mut orders = repo.orders.write();
        let mut cache = repo.order_idx_cache.write();

        let mut seen = HashSet::new();
        for item in &items {
            if orders.contains_key(&item.id) || !seen.insert(item.id) {
                return Err(format!("Order {} already exists", item.id).into());
            }
        }

        for item in &items {
            cache.add(item.to_index());
            orders.insert(item.id, item.clone());
        }
        tracing::debug!(count = items.len(), "created orders");

        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<OrderModel> for OrderRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<OrderModel>,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
