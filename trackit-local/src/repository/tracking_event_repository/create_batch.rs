use async_trait::async_trait;
use std::collections::HashSet;
use std::error::Error;
use trackit_db::models::{tracking_event::TrackingEventModel, IndexAware};
use trackit_db::repository::create_batch::CreateBatch;

use super::repo_impl::TrackingEventRepositoryImpl;

#[async_trait]
impl CreateBatch<TrackingEventModel> for TrackingEventRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<TrackingEventModel>,
    ) -> Result<Vec<TrackingEventModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut events = self.tracking_events.write();
        let mut cache = self.tracking_event_idx_cache.write();

        let mut seen = HashSet::new();
        for item in &items {
            if events.contains_key(&item.id) || !seen.insert(item.id) {
                return Err(format!("Tracking event {} already exists", item.id).into());
            }
        }

        for item in &items {
            cache.add(item.to_index());
            events.insert(item.id, item.clone());
        }
        tracing::debug!(count = items.len(), "created tracking events");

        Ok(items)
    }
}
