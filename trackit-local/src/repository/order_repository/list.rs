use std::error::Error;
use trackit_db::models::order::OrderModel;
use trackit_db::repository::pagination::{Page, PageRequest};

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// Every order in the order it was created.
    pub async fn list_all(&self) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        let indices = self.order_idx_cache.read().items();
        Ok(self.rows_for(&indices))
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<OrderModel>, Box<dyn Error + Send + Sync>> {
        Ok(Page::from_ordered(self.list_all().await?, request))
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::order_repository::test_utils::create_test_order;
    use crate::test_helper::setup_test_context;
    use trackit_db::repository::{create_batch::CreateBatch, pagination::PageRequest};

    #[tokio::test]
    async fn test_list_pages_in_creation_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let order_repo = &ctx.repos().order_repository;

        let orders: Vec<_> = (0..5).map(|n| create_test_order(&format!("TRK9400{n}"))).collect();
        order_repo.create_batch(orders.clone()).await?;

        let page = order_repo.list(PageRequest::for_page(2, 2)).await?;
        assert_eq!(page.total, 5);
        assert_eq!(page.items, orders[2..4].to_vec());
        assert!(page.has_more());

        Ok(())
    }
}
