//! Product Service Module
//!
//! CRUD over a single product table. The schema is provisioned on startup
//! through an admin connection; data calls go through a keyspace-bound
//! session. Wire DTOs and storage entities are converted only by the domain
//! service.

// Public exports
pub mod contract;
pub use contract::{
    InvalidKeyspace, Keyspace, MapperInitializationError, ProductApi, ProductDto,
    SchemaProvisioningError, StorageError,
};

pub mod module;
pub use module::ProductServiceModule;

pub mod config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
