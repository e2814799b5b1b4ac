use std::sync::Arc;
use trackit_api::{ApiError, ApiResult};
use trackit_db::models::{order::OrderModel, tracking_event::TrackingEventModel};

use crate::repository::{OrderRepositoryImpl, TrackingEventRepositoryImpl};

/// An order together with its tracking history, newest event first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingDetails {
    pub order: OrderModel,
    pub events: Vec<TrackingEventModel>,
}

impl TrackingDetails {
    pub fn latest_event(&self) -> Option<&TrackingEventModel> {
        self.events.first()
    }
}

pub struct TrackingService {
    orders: Arc<OrderRepositoryImpl>,
    tracking_events: Arc<TrackingEventRepositoryImpl>,
}

impl TrackingService {
    pub fn new(orders: Arc<OrderRepositoryImpl>, tracking_events: Arc<TrackingEventRepositoryImpl>) -> Self {
        Self {
            orders,
            tracking_events,
        }
    }

    /// # Returns
    /// * `Err(ApiError::NotFound)` - No order carries this tracking number
    pub async fn tracking_details(&self, tracking_number: &str) -> ApiResult<TrackingDetails> {
        let order = self
            .orders
            .find_by_tracking_number(tracking_number)
            .await
            .map_err(ApiError::storage)?
            .ok_or_else(|| ApiError::NotFound(format!("Tracking number {}", tracking_number.trim())))?;

        let events = self
            .tracking_events
            .find_by_order_id(order.id)
            .await
            .map_err(ApiError::storage)?;
        tracing::debug!(tracking_number = %order.tracking_number, events = events.len(), "tracking details loaded");

        Ok(TrackingDetails { order, events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::FEATURED_TRACKING_NUMBER;
    use crate::test_helper::setup_seeded_context;
    use std::error::Error;

    async fn setup_service() -> Result<TrackingService, Box<dyn Error + Send + Sync>> {
        let ctx = setup_seeded_context().await?;
        Ok(TrackingService::new(
            ctx.repos().order_repository.clone(),
            ctx.repos().tracking_event_repository.clone(),
        ))
    }

    #[tokio::test]
    async fn test_tracking_details() -> Result<(), Box<dyn Error + Send + Sync>> {
        let service = setup_service().await?;

        let details = service.tracking_details(FEATURED_TRACKING_NUMBER).await?;
        assert_eq!(details.order.order_number.as_str(), "ORD-2025-001");
        assert_eq!(details.events.len(), 6);
        assert_eq!(
            details.latest_event().map(|e| e.location.as_str()),
            Some("San Francisco, CA")
        );
        assert!(details
            .events
            .windows(2)
            .all(|pair| pair[0].occurred_at > pair[1].occurred_at));

        Ok(())
    }

    #[tokio::test]
    async fn test_order_without_history() -> Result<(), Box<dyn Error + Send + Sync>> {
        let service = setup_service().await?;
        let details = service.tracking_details("TRK321654987").await?;
        assert!(details.events.is_empty());
        assert_eq!(details.latest_event(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_tracking_number() -> Result<(), Box<dyn Error + Send + Sync>> {
        let service = setup_service().await?;
        let result = service.tracking_details("TRK000000000").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        Ok(())
    }
}
