use std::collections::HashMap;
use uuid::Uuid;

use super::indexable::{HasPrimaryKey, Indexable};

/// In-memory cache of index records with secondary lookups.
///
/// Every record is stored once by primary key. Each named key reported by
/// [`Indexable`] gets its own map from key value to the primary keys that
/// carry it, in insertion order.
#[derive(Debug, Clone)]
pub struct IdxModelCache<T> {
    by_primary_key: HashMap<Uuid, T>,
    insertion_order: Vec<Uuid>,
    i64_index: HashMap<String, HashMap<i64, Vec<Uuid>>>,
    uuid_index: HashMap<String, HashMap<Uuid, Vec<Uuid>>>,
}

impl<T> Default for IdxModelCache<T> {
    fn default() -> Self {
        Self {
            by_primary_key: HashMap::new(),
            insertion_order: Vec::new(),
            i64_index: HashMap::new(),
            uuid_index: HashMap::new(),
        }
    }
}

impl<T> IdxModelCache<T>
where
    T: Indexable + HasPrimaryKey + Clone,
{
    /// Builds a cache from an initial set of records.
    ///
    /// # Returns
    /// * `Err` - Two records share a primary key
    pub fn new(items: Vec<T>) -> Result<Self, String> {
        let mut cache = Self::default();
        for item in items {
            let primary_key = item.primary_key();
            if cache.contains_primary_key(&primary_key) {
                return Err(format!("Duplicate primary key in index cache: {primary_key}"));
            }
            cache.add(item);
        }
        Ok(cache)
    }

    /// Inserts a record, replacing any record with the same primary key.
    pub fn add(&mut self, item: T) {
        let primary_key = item.primary_key();
        // A replaced record moves to the end of the insertion order.
        self.remove(&primary_key);
        self.insertion_order.push(primary_key);

        for (name, value) in item.i64_keys() {
            if let Some(value) = value {
                self.i64_index
                    .entry(name)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .push(primary_key);
            }
        }
        for (name, value) in item.uuid_keys() {
            if let Some(value) = value {
                self.uuid_index
                    .entry(name)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .push(primary_key);
            }
        }

        self.by_primary_key.insert(primary_key, item);
    }

    pub fn remove(&mut self, primary_key: &Uuid) -> Option<T> {
        let item = self.by_primary_key.remove(primary_key)?;
        self.insertion_order.retain(|id| id != primary_key);

        for (name, value) in item.i64_keys() {
            if let (Some(value), Some(index)) = (value, self.i64_index.get_mut(&name)) {
                if let Some(ids) = index.get_mut(&value) {
                    ids.retain(|id| id != primary_key);
                    if ids.is_empty() {
                        index.remove(&value);
                    }
                }
            }
        }
        for (name, value) in item.uuid_keys() {
            if let (Some(value), Some(index)) = (value, self.uuid_index.get_mut(&name)) {
                if let Some(ids) = index.get_mut(&value) {
                    ids.retain(|id| id != primary_key);
                    if ids.is_empty() {
                        index.remove(&value);
                    }
                }
            }
        }

        Some(item)
    }

    pub fn contains_primary_key(&self, primary_key: &Uuid) -> bool {
        self.by_primary_key.contains_key(primary_key)
    }

    pub fn get_by_primary_key(&self, primary_key: &Uuid) -> Option<T> {
        self.by_primary_key.get(primary_key).cloned()
    }

    pub fn get_by_i64_index(&self, key: &str, value: &i64) -> Vec<T> {
        self.i64_index
            .get(key)
            .and_then(|index| index.get(value))
            .map(|ids| self.collect(ids))
            .unwrap_or_default()
    }

    pub fn get_by_uuid_index(&self, key: &str, value: &Uuid) -> Vec<T> {
        self.uuid_index
            .get(key)
            .and_then(|index| index.get(value))
            .map(|ids| self.collect(ids))
            .unwrap_or_default()
    }

    /// All records in insertion order.
    pub fn items(&self) -> Vec<T> {
        self.collect(&self.insertion_order)
    }

    pub fn len(&self) -> usize {
        self.by_primary_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_primary_key.is_empty()
    }

    fn collect(&self, ids: &[Uuid]) -> Vec<T> {
        ids.iter()
            .filter_map(|id| self.by_primary_key.get(id).cloned())
            .collect()
    }
}
