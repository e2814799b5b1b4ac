pub mod auth_service;
pub mod invoice_service;
pub mod order_service;
pub mod tracking_service;

pub use auth_service::MockAuthService;
pub use invoice_service::generate_invoice;
pub use order_service::{OrderFilter, OrderService, OrderStats, OrderTab};
pub use tracking_service::{TrackingDetails, TrackingService};
