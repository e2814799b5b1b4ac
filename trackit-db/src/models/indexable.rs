use std::collections::HashMap;
use uuid::Uuid;

/// Exposes the secondary keys an index record can be looked up by.
pub trait Indexable {
    /// Named i64 keys, usually hashes of string columns
    fn i64_keys(&self) -> HashMap<String, Option<i64>>;

    /// Named foreign keys
    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>>;
}

/// Trait for index records keyed by the id of the model they index
pub trait HasPrimaryKey {
    fn primary_key(&self) -> Uuid;
}
