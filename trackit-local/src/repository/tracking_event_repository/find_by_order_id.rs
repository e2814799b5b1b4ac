use std::error::Error;
use trackit_db::models::tracking_event::TrackingEventModel;
use uuid::Uuid;

use super::repo_impl::TrackingEventRepositoryImpl;

impl TrackingEventRepositoryImpl {
    /// Events of one order, newest first.
    pub async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<TrackingEventModel>, Box<dyn Error + Send + Sync>> {
        let indices = self
            .tracking_event_idx_cache
            .read()
            .get_by_uuid_index("order_id", &order_id);

        let events = self.tracking_events.read();
        let mut found: Vec<TrackingEventModel> = indices
            .iter()
            .filter_map(|idx| events.get(&idx.id).cloned())
            .collect();
        found.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(found)
    }
}
