//! Contract error types for the product service

use sea_orm::{DbBackend, DbErr};
use thiserror::Error;

use super::model::Keyspace;

/// Failure of a data operation against the backing store.
///
/// "Not found" is never reported through this type: lookups return `None`
/// and deletes of absent keys succeed.
#[derive(Debug, Error)]
#[error("storage operation failed: {source}")]
pub struct StorageError {
    #[from]
    source: DbErr,
}

/// Startup failure while ensuring the keyspace and product table exist.
#[derive(Debug, Error)]
pub enum SchemaProvisioningError {
    /// The admin connection's backend has no notion of a namespace
    #[error("backend {backend:?} does not support keyspaces")]
    UnsupportedBackend { backend: DbBackend },

    /// A schema statement was rejected (not connected, missing privileges, ...)
    #[error("failed to provision keyspace '{keyspace}': {source}")]
    Statement {
        keyspace: Keyspace,
        #[source]
        source: DbErr,
    },
}

/// The data session handed to the repository has no bound keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keyspace on session: {session} was not set")]
pub struct MapperInitializationError {
    /// Diagnostic name of the offending session
    pub session: String,
}

/// Keyspace name rejected by validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid keyspace name '{name}': {reason}")]
pub struct InvalidKeyspace {
    pub name: String,
    pub reason: &'static str,
}
