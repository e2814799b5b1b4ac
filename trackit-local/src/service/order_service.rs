use std::sync::Arc;
use trackit_api::{ApiError, ApiResult};
use trackit_db::models::order::{OrderModel, OrderStatus};
use trackit_db::repository::pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::repository::OrderRepositoryImpl;

/// Tabs of the orders view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderTab {
    #[default]
    All,
    Active,
    Delivered,
    Exception,
}

impl OrderTab {
    pub fn includes(&self, status: OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Active => status.is_active(),
            OrderTab::Delivered => status == OrderStatus::Delivered,
            OrderTab::Exception => status == OrderStatus::Exception,
        }
    }
}

impl std::fmt::Display for OrderTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderTab::All => write!(f, "all"),
            OrderTab::Active => write!(f, "active"),
            OrderTab::Delivered => write!(f, "delivered"),
            OrderTab::Exception => write!(f, "exception"),
        }
    }
}

impl std::str::FromStr for OrderTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(OrderTab::All),
            "active" => Ok(OrderTab::Active),
            "delivered" => Ok(OrderTab::Delivered),
            "exception" => Ok(OrderTab::Exception),
            _ => Err(()),
        }
    }
}

/// Tab plus free-text search as entered on the orders view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub tab: OrderTab,
    pub search: String,
}

impl OrderFilter {
    pub fn new(tab: OrderTab, search: impl Into<String>) -> Self {
        Self {
            tab,
            search: search.into(),
        }
    }

    /// Case-insensitive substring match over order number, tracking number
    /// and items. The term is used as typed, surrounding spaces included.
    /// An empty search matches everything on the tab.
    pub fn matches(&self, order: &OrderModel) -> bool {
        if !self.tab.includes(order.status) {
            return false;
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            order.order_number.as_str(),
            order.tracking_number.as_str(),
            order.items.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Counters shown above the order list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub active: usize,
    pub delivered: usize,
    pub exceptions: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[OrderModel]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total += 1;
            if order.status.is_active() {
                stats.active += 1;
            }
            match order.status {
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Exception => stats.exceptions += 1,
                _ => {}
            }
            stats
        })
    }
}

pub struct OrderService {
    orders: Arc<OrderRepositoryImpl>,
}

impl OrderService {
    pub fn new(orders: Arc<OrderRepositoryImpl>) -> Self {
        Self { orders }
    }

    pub async fn list_orders(&self, request: PageRequest) -> ApiResult<Page<OrderModel>> {
        self.orders.list(request).await.map_err(ApiError::storage)
    }

    pub async fn filter_orders(&self, filter: &OrderFilter) -> ApiResult<Vec<OrderModel>> {
        let all = self.orders.list_all().await.map_err(ApiError::storage)?;
        Ok(all.into_iter().filter(|order| filter.matches(order)).collect())
    }

    pub async fn stats(&self) -> ApiResult<OrderStats> {
        let all = self.orders.list_all().await.map_err(ApiError::storage)?;
        Ok(OrderStats::from_orders(&all))
    }

    pub async fn find_by_tracking_number(&self, tracking_number: &str) -> ApiResult<Option<OrderModel>> {
        self.orders
            .find_by_tracking_number(tracking_number)
            .await
            .map_err(ApiError::storage)
    }

    pub async fn orders_for_customer(&self, customer_id: Uuid) -> ApiResult<Vec<OrderModel>> {
        self.orders
            .find_by_customer_id(customer_id)
            .await
            .map_err(ApiError::storage)
    }
}
