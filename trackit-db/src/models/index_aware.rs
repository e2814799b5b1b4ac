use super::index::Index;

/// Trait for models that maintain a lookup index record
pub trait IndexAware {
    /// The associated Index type that this type can be converted to
    type IndexType: Index;

    /// Builds the index record for this model
    fn to_index(&self) -> Self::IndexType;
}
