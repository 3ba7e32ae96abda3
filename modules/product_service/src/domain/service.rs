//! Domain service - the only place entities become DTOs and back

use crate::config::YourSetting;
use crate::contract::{ProductApi, ProductDto, StorageError};
use super::repository::ProductRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Product service
///
/// Pure pass-through plus type conversion: ids and descriptions are not
/// validated here.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new service instance.
    ///
    /// `setting` is only logged.
    pub fn new(repo: Arc<dyn ProductRepository>, setting: &YourSetting) -> Self {
        tracing::trace!(setting = %setting.a, "Starting service with setting");
        Self { repo }
    }
}

#[async_trait]
impl ProductApi for ProductService {
    async fn get_product(&self, id: i32) -> Result<Option<ProductDto>, StorageError> {
        Ok(self.repo.find_by_id(id).await?.map(ProductDto::from))
    }

    async fn save_product(&self, product: ProductDto) -> Result<bool, StorageError> {
        self.repo.save(&product.into()).await
    }

    async fn delete_product(&self, id: i32) -> Result<bool, StorageError> {
        self.repo.delete(id).await
    }
}
