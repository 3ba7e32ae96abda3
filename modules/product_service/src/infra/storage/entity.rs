//! Product entity and its table identifiers

use sea_orm::DeriveIden;

/// In-memory mirror of one row of the `product` table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Partition key
    pub id: i32,

    pub description: String,
}

impl Product {
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// Table and column names of the product table
#[derive(Clone, Copy, Debug, DeriveIden)]
pub enum ProductTable {
    #[sea_orm(iden = "product")]
    Table,
    Id,
    Description,
}
