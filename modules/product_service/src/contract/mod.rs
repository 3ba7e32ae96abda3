//! Contract layer - public API for in-process callers and the REST transport
//!
//! Holds the wire representation, the native client trait and the error
//! taxonomy. Storage entities never cross this boundary.

pub mod client;
pub mod error;
pub mod model;

pub use client::ProductApi;
pub use error::{InvalidKeyspace, MapperInitializationError, SchemaProvisioningError, StorageError};
pub use model::{Keyspace, ProductDto};
