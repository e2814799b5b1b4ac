pub mod identifiable;
pub mod index;
pub mod index_aware;
pub mod index_cache;
pub mod indexable;
pub mod user;
pub mod order;
pub mod tracking_event;
pub mod invoice;

// Re-exports
pub use identifiable::*;
pub use index::*;
pub use index_aware::*;
pub use index_cache::*;
pub use indexable::*;
pub use user::*;
pub use order::*;
pub use tracking_event::*;
pub use invoice::*;
