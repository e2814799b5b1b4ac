use trackit_db::models::order::{OrderIdxModel, OrderModel};

use crate::repository::{SharedIdxCache, Table};

pub struct OrderRepositoryImpl {
    pub(super) orders: Table<OrderModel>,
    pub(super) order_idx_cache: SharedIdxCache<OrderIdxModel>,
}

impl OrderRepositoryImpl {
    pub fn new(orders: Table<OrderModel>, order_idx_cache: SharedIdxCache<OrderIdxModel>) -> Self {
        Self {
            orders,
            order_idx_cache,
        }
    }

    /// Resolves index hits to full rows, skipping ids with no row.
    pub(super) fn rows_for(&self, indices: &[OrderIdxModel]) -> Vec<OrderModel> {
        let orders = self.orders.read();
        indices
            .iter()
            .filter_map(|idx| orders.get(&idx.id).cloned())
            .collect()
    }
}
