//! Seed tables for the demo deployment.

use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use trackit_api::Role;
use trackit_db::models::{OrderModel, OrderStatus, TrackingEventModel, UserModel};
use trackit_db::utils::heapless_string;
use uuid::Uuid;

pub const CUSTOMER_ID: Uuid = Uuid::from_u128(1);
pub const SUPPORT_ID: Uuid = Uuid::from_u128(2);
pub const ADMIN_ID: Uuid = Uuid::from_u128(3);

/// Tracking number of the shipment with a full event history.
pub const FEATURED_TRACKING_NUMBER: &str = "TRK123456789";

const DEMO_NAME: &str = "John Smith";

type SeedResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub fn users() -> SeedResult<Vec<UserModel>> {
    [
        (CUSTOMER_ID, "customer@trackit.com", Role::Customer),
        (SUPPORT_ID, "support@trackit.com", Role::Support),
        (ADMIN_ID, "admin@trackit.com", Role::Admin),
    ]
    .into_iter()
    .map(|(id, email, role)| -> SeedResult<UserModel> {
        Ok(UserModel {
            id,
            email: heapless_string(email)?,
            name: heapless_string(DEMO_NAME)?,
            role,
        })
    })
    .collect()
}

pub fn order_id(n: u128) -> Uuid {
    Uuid::from_u128(0x100 + n)
}

pub fn orders() -> SeedResult<Vec<OrderModel>> {
    [
        (1, "ORD-2025-001", OrderStatus::OutForDelivery, "FedEx Express", "Today by 8:00 PM", 75, "Electronics Package", "TRK123456789"),
        (2, "ORD-2024-002", OrderStatus::InTransit, "UPS Ground", "Jan 5, 2026", 45, "Books (3 items)", "TRK987654321"),
        (3, "ORD-2023-158", OrderStatus::Delivered, "USPS Priority", "Delivered Dec 28", 100, "Clothing", "TRK456789123"),
        (4, "ORD-2026-003", OrderStatus::Exception, "FedEx Ground", "Delayed - Jan 6", 30, "Furniture", "TRK321654987"),
    ]
    .into_iter()
    .map(
        |(n, order_number, status, carrier, estimated_delivery, progress, items, tracking_number)| -> SeedResult<OrderModel> {
            Ok(OrderModel {
                id: order_id(n),
                order_number: heapless_string(order_number)?,
                status,
                carrier: heapless_string(carrier)?,
                estimated_delivery: heapless_string(estimated_delivery)?,
                progress,
                items: heapless_string(items)?,
                tracking_number: heapless_string(tracking_number)?,
                customer_id: Some(CUSTOMER_ID),
            })
        },
    )
    .collect()
}

fn at(day: u32, hour: u32, minute: u32) -> SeedResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2026, 1, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| format!("Invalid event time: 2026-01-{day:02} {hour:02}:{minute:02}").into())
}

/// History of the featured shipment, oldest first.
pub fn tracking_events() -> SeedResult<Vec<TrackingEventModel>> {
    [
        (1, 10, 30, "Order Placed", "Online", "Order confirmed and processing"),
        (1, 14, 0, "Picked Up", "Los Angeles, CA", "Package picked up by carrier"),
        (2, 15, 20, "Departed Facility", "Los Angeles, CA", "Package departed from sorting facility"),
        (2, 23, 45, "In Transit", "Oakland, CA", "Package in transit to destination"),
        (3, 6, 15, "Arrived at Facility", "SF Distribution Center", "Package arrived at local facility"),
        (3, 8, 30, "Out for Delivery", "San Francisco, CA", "Package is on the delivery vehicle"),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (day, hour, minute, status, location, description))| -> SeedResult<TrackingEventModel> {
        Ok(TrackingEventModel {
            id: Uuid::from_u128(0x200 + n as u128),
            order_id: order_id(1),
            status: heapless_string(status)?,
            location: heapless_string(location)?,
            occurred_at: at(day, hour, minute)?,
            description: heapless_string(description)?,
        })
    })
    .collect()
}
