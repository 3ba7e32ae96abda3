//! Native client trait for the product service
//!
//! The REST transport talks to the service only through this trait, which
//! keeps handlers testable against a stub implementation.

use super::{error::StorageError, model::ProductDto};
use async_trait::async_trait;

/// Product operations exposed to the transport and to in-process callers
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Look up a product. `Ok(None)` when no row exists for `id`.
    async fn get_product(&self, id: i32) -> Result<Option<ProductDto>, StorageError>;

    /// Insert or overwrite a product. Always `true` on success.
    async fn save_product(&self, product: ProductDto) -> Result<bool, StorageError>;

    /// Remove a product. `true` whether or not the row existed.
    async fn delete_product(&self, id: i32) -> Result<bool, StorageError>;
}
