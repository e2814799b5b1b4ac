use std::error::Error;
use trackit_db::models::order::OrderModel;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub async fn find_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        let indices = self
            .order_idx_cache
            .read()
            .get_by_uuid_index("customer_id", &customer_id);
        Ok(self.rows_for(&indices))
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::order_repository::test_utils::create_test_order;
    use crate::test_helper::setup_test_context;
    use trackit_db::repository::create_batch::CreateBatch;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_find_by_customer_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let order_repo = &ctx.repos().order_repository;

        let customer_id = Uuid::new_v4();
        let mut mine = create_test_order("TRK93001");
        mine.customer_id = Some(customer_id);
        let other = create_test_order("TRK93002");
        order_repo.create_batch(vec![mine.clone(), other]).await?;

        let found = order_repo.find_by_customer_id(customer_id).await?;
        assert_eq!(found, vec![mine]);
        assert!(order_repo.find_by_customer_id(Uuid::new_v4()).await?.is_empty());

        Ok(())
    }
}
