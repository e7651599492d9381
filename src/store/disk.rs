use crate::store::{KeyValueCollection, StoreError};
use fjall::{Keyspace, PartitionHandle, PersistMode};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use tracing::debug;

/// A typed collection persisted in one keyspace partition.
///
/// Values are serialized as JSON. Every write is followed by a synchronous
/// keyspace persist, so a mutation is durable before the call returns.
pub struct DiskCollection<V>
where
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    keyspace: Keyspace,
    partition: PartitionHandle,
    _marker: PhantomData<V>,
}

impl<V> DiskCollection<V>
where
    V: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(keyspace: Keyspace, partition: PartitionHandle) -> Self {
        Self {
            keyspace,
            partition,
            _marker: PhantomData,
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

impl<V> KeyValueCollection<V> for DiskCollection<V>
where
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        match self.partition.get(key)? {
            Some(bytes) => {
                debug!("Store HIT for key: {key}");
                let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                    key: key.to_string(),
                    source,
                })?;
                Ok(Some(value))
            }
            None => {
                debug!("Store MISS for key: {key}");
                Ok(None)
            }
        }
    }

    fn put(&self, key: &str, value: &V) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.partition.insert(key, bytes)?;
        debug!("Store PUT for key: {key}");
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.partition.remove(key)?;
        debug!("Store REMOVE for key: {key}");
        self.flush()
    }
}
