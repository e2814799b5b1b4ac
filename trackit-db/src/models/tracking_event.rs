use chrono::NaiveDateTime;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{HasPrimaryKey, IdxModelCache, Identifiable, Index, IndexAware, Indexable};

/// One scan or hand-over in a shipment's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEventModel {
    pub id: Uuid,
    /// References OrderModel.id
    pub order_id: Uuid,
    pub status: HeaplessString<50>,
    pub location: HeaplessString<100>,
    pub occurred_at: NaiveDateTime,
    pub description: HeaplessString<200>,
}

impl Identifiable for TrackingEventModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEventIdxModel {
    pub id: Uuid,
    pub order_id: Uuid,
}

impl IndexAware for TrackingEventModel {
    type IndexType = TrackingEventIdxModel;

    fn to_index(&self) -> Self::IndexType {
        TrackingEventIdxModel {
            id: self.id,
            order_id: self.order_id,
        }
    }
}

impl Identifiable for TrackingEventIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for TrackingEventIdxModel {}

impl Indexable for TrackingEventIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("order_id".to_string(), Some(self.order_id));
        keys
    }
}

impl HasPrimaryKey for TrackingEventIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

pub type TrackingEventIdxModelCache = IdxModelCache<TrackingEventIdxModel>;
