use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// Either every item is stored or none is: a batch that conflicts with an
/// existing id, or repeats an id, is rejected as a whole.
///
/// # Example
/// ```ignore
/// impl CreateBatch<OrderModel> for OrderRepositoryImpl {
///     async fn create_batch(&self, items: Vec<OrderModel>) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Save multiple items
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The stored entities
    /// * `Err` - An id already exists or the store could not be written
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
