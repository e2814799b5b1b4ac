use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
///
/// Any entity that implements the Identifiable trait can be loaded using this trait.
///
/// # Example
/// ```ignore
/// impl Load<OrderModel> for OrderRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<OrderModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded entity
    /// * `Err` - The entity does not exist or could not be read
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
