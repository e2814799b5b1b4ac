use trackit_db::models::tracking_event::{TrackingEventIdxModel, TrackingEventModel};

use crate::repository::{SharedIdxCache, Table};

pub struct TrackingEventRepositoryImpl {
    pub(super) tracking_events: Table<TrackingEventModel>,
    pub(super) tracking_event_idx_cache: SharedIdxCache<TrackingEventIdxModel>,
}

impl TrackingEventRepositoryImpl {
    pub fn new(
        tracking_events: Table<TrackingEventModel>,
        tracking_event_idx_cache: SharedIdxCache<TrackingEventIdxModel>,
    ) -> Self {
        Self {
            tracking_events,
            tracking_event_idx_cache,
        }
    }
}
