pub mod exist_by_ids;
pub mod load;
pub mod load_batch;
pub mod create_batch;
pub mod pagination;
pub mod session_store;

// Re-exports
pub use exist_by_ids::*;
pub use load::*;
pub use load_batch::*;
pub use create_batch::*;
pub use pagination::*;
pub use session_store::*;
