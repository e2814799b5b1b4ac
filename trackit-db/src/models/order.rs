use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{HasPrimaryKey, IdxModelCache, Identifiable, Index, IndexAware, Indexable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    OutForDelivery,
    InTransit,
    Delivered,
    Exception,
}

impl OrderStatus {
    /// Label shown on order cards and badges
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Exception => "Exception",
        }
    }

    /// Anything not yet delivered counts as active, exceptions included.
    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "in_transit" => Ok(OrderStatus::InTransit),
            "delivered" => Ok(OrderStatus::Delivered),
            "exception" => Ok(OrderStatus::Exception),
            _ => Err(()),
        }
    }
}

/// A customer order and the shipment carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: Uuid,

    /// Business reference such as `ORD-2025-001`
    pub order_number: HeaplessString<20>,

    pub status: OrderStatus,
    pub carrier: HeaplessString<50>,

    /// Free-text estimate as quoted by the carrier
    pub estimated_delivery: HeaplessString<50>,

    /// Delivery progress in percent, 0..=100
    pub progress: u8,

    pub items: HeaplessString<100>,
    pub tracking_number: HeaplessString<20>,

    /// References UserModel.id of the ordering customer
    pub customer_id: Option<Uuid>,
}

impl Identifiable for OrderModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for Order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderIdxModel {
    pub id: Uuid,
    pub tracking_number_hash: Option<i64>,
    pub customer_id: Option<Uuid>,
}

impl IndexAware for OrderModel {
    type IndexType = OrderIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let tracking_number = crate::utils::normalize_tracking_number(&self.tracking_number);
        OrderIdxModel {
            id: self.id,
            tracking_number_hash: crate::utils::hash_as_i64(&tracking_number.as_str()).ok(),
            customer_id: self.customer_id,
        }
    }
}

impl Identifiable for OrderIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for OrderIdxModel {}

impl Indexable for OrderIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert(
            "tracking_number_hash".to_string(),
            self.tracking_number_hash,
        );
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("customer_id".to_string(), self.customer_id);
        keys
    }
}

impl HasPrimaryKey for OrderIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

pub type OrderIdxModelCache = IdxModelCache<OrderIdxModel>;
