//! Key-value persistence for ledgers and sessions.
//!
//! The store is the source of truth for user data, so unlike a cache every
//! operation surfaces its failure to the caller instead of degrading to an
//! empty read.

pub mod disk;
pub mod memory;

use disk::DiskCollection;
use fjall::{Keyspace, PartitionCreateOptions};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] fjall::Error),
    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to decode value for key `{key}`: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

/// A named collection of serialized values addressed by string keys.
pub trait KeyValueCollection<V>: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<V>, StoreError>;
    fn put(&self, key: &str, value: &V) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// A key-value store that can hold multiple named collections, each backed
/// by its own keyspace partition.
pub struct KeyValueStore {
    keyspace: Keyspace,
}

impl KeyValueStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let keyspace = fjall::Config::new(path).open()?;
        Ok(Self { keyspace })
    }

    pub fn collection<V>(&self, name: &str) -> Result<Arc<dyn KeyValueCollection<V>>, StoreError>
    where
        V: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let partition = self
            .keyspace
            .open_partition(name, PartitionCreateOptions::default())?;
        Ok(Arc::new(DiskCollection::new(
            self.keyspace.clone(),
            partition,
        )))
    }
}
