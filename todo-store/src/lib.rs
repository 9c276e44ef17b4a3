#![deny(missing_docs)]

//! Read access to the objects served by the get-todo function.
//!
//! Handlers depend on the [`ObjectStore`] trait rather than on an S3 client directly.
//! [`S3Store`] talks to Amazon S3 and [`MemoryStore`] keeps objects in process, which
//! is what the tests run against.

use async_trait::async_trait;
use bytes::Bytes;

mod error;
mod memory;
mod s3;

pub use crate::{error::StoreError, memory::MemoryStore, s3::S3Store};

/// Address of a stored object: a bucket and a key inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    /// Bucket holding the object
    pub bucket: &'static str,
    /// Key of the object inside the bucket
    pub key: &'static str,
}

impl ObjectLocation {
    /// The todo list document.
    pub const TODO_DATA: ObjectLocation = ObjectLocation {
        bucket: "grp3-cap2b-data",
        key: "todo-data.json",
    };
}

/// A read-only source of whole objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Return the full contents of the object at `location`.
    async fn get_object(&self, location: ObjectLocation) -> Result<Bytes, StoreError>;
}
