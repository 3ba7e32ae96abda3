//! Repository trait for product data access
//!
//! The SeaORM implementation lives in infra/storage/repositories.rs.

use crate::contract::StorageError;
use crate::infra::storage::Product;
use async_trait::async_trait;

/// Data access for the product table
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by key. A missing row is `Ok(None)`.
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError>;

    /// Insert a product, overwriting any row with the same id
    async fn save(&self, product: &Product) -> Result<bool, StorageError>;

    /// Delete a product. Succeeds for ids that were never stored.
    async fn delete(&self, id: i32) -> Result<bool, StorageError>;
}
