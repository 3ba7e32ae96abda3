//! Shared test doubles for the product repository

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use product_service::config::YourSetting;
use product_service::domain::{ProductRepository, ProductService};
use product_service::infra::storage::Product;
use product_service::StorageError;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Arc;

/// Repository keeping rows in a map, with store-like overwrite semantics
#[derive(Clone, Default)]
pub struct InMemoryProductRepo {
    rows: Arc<RwLock<HashMap<i32, Product>>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    pub fn row(&self, id: i32) -> Option<Product> {
        self.rows.read().get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn save(&self, product: &Product) -> Result<bool, StorageError> {
        self.rows.write().insert(product.id, product.clone());
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        self.rows.write().remove(&id);
        Ok(true)
    }
}

/// Repository whose every call fails like a lost connection
pub struct UnavailableProductRepo;

fn connection_lost() -> StorageError {
    StorageError::from(DbErr::Custom("connection lost".to_string()))
}

#[async_trait]
impl ProductRepository for UnavailableProductRepo {
    async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, StorageError> {
        Err(connection_lost())
    }

    async fn save(&self, _product: &Product) -> Result<bool, StorageError> {
        Err(connection_lost())
    }

    async fn delete(&self, _id: i32) -> Result<bool, StorageError> {
        Err(connection_lost())
    }
}

pub fn setting() -> YourSetting {
    YourSetting {
        a: "value-test".to_string(),
    }
}

pub fn service_over(repo: Arc<dyn ProductRepository>) -> Arc<ProductService> {
    Arc::new(ProductService::new(repo, &setting()))
}
