use trackit_db::models::order::{OrderModel, OrderStatus};
use trackit_db::utils::heapless_string;
use uuid::Uuid;

pub fn create_test_order(tracking_number: &str) -> OrderModel {
    OrderModel {
        id: Uuid::new_v4(),
        order_number: heapless_string("ORD-TEST-001").unwrap(),
        status: OrderStatus::InTransit,
        carrier: heapless_string("Test Carrier").unwrap(),
        estimated_delivery: heapless_string("Tomorrow").unwrap(),
        progress: 50,
        items: heapless_string("Test Parcel").unwrap(),
        tracking_number: heapless_string(tracking_number).unwrap(),
        customer_id: None,
    }
}
