use crate::store::{KeyValueCollection, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory collection backed by a HashMap, for tests and ephemeral runs.
pub struct MemoryCollection<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: RwLock<HashMap<String, V>>,
}

impl<V> MemoryCollection<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> Default for MemoryCollection<V>
where
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KeyValueCollection<V> for MemoryCollection<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        let map = self.inner.read().unwrap();
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &V) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap();
        map.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap();
        map.remove(key);
        Ok(())
    }
}
