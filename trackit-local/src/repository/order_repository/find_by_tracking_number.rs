use std::error::Error;
use trackit_db::models::order::OrderModel;
use trackit_db::utils::{hash_as_i64, normalize_tracking_number};

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// Looks an order up by tracking number, ignoring case and surrounding
    /// whitespace.
    pub async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<OrderModel>, Box<dyn Error + Send + Sync>> {
        let normalized = normalize_tracking_number(tracking_number);
        let tracking_number_hash = hash_as_i64(&normalized.as_str())?;

        let indices = self
            .order_idx_cache
            .read()
            .get_by_i64_index("tracking_number_hash", &tracking_number_hash);

        // Hash hits are confirmed against the stored value.
        Ok(self
            .rows_for(&indices)
            .into_iter()
            .find(|order| normalize_tracking_number(&order.tracking_number) == normalized))
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::order_repository::test_utils::create_test_order;
    use crate::test_helper::setup_test_context;
    use trackit_db::repository::create_batch::CreateBatch;

    #[tokio::test]
    async fn test_find_by_tracking_number() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let order_repo = &ctx.repos().order_repository;

        let saved = order_repo
            .create_batch(vec![create_test_order("TRK92001"), create_test_order("TRK92002")])
            .await?;

        let found = order_repo.find_by_tracking_number(" trk92002 ").await?;
        assert_eq!(found.map(|o| o.id), Some(saved[1].id));

        assert!(order_repo.find_by_tracking_number("TRK00000").await?.is_none());
        assert!(order_repo.find_by_tracking_number("").await?.is_none());

        Ok(())
    }
}
