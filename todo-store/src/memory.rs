use crate::{ObjectLocation, ObjectStore, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Objects held in process memory.
///
/// Contents are fixed once the store is built, so reads never observe a partial update.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    objects: HashMap<ObjectLocation, Bytes>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the object at `location`.
    pub fn with_object(mut self, location: ObjectLocation, contents: impl Into<Bytes>) -> Self {
        self.objects.insert(location, contents.into());
        self
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, location: ObjectLocation) -> Result<Bytes, StoreError> {
        // Bytes clones share the buffer
        self.objects.get(&location).cloned().ok_or_else(|| StoreError::NotFound {
            bucket: location.bucket.to_string(),
            key: location.key.to_string(),
        })
    }
}
