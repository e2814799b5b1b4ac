pub mod error;
pub mod file_session_store;
pub mod memory_session_store;

pub use error::SessionStoreError;
pub use file_session_store::FileSessionStore;
pub use memory_session_store::InMemorySessionStore;
