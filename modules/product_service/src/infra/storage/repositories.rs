//! SeaORM repository implementation

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use super::entity::{Product, ProductTable};
use super::mapper::COLUMNS;
use super::session::Session;
use crate::contract::{Keyspace, MapperInitializationError, StorageError};
use crate::domain::repository::ProductRepository;

/// Product data access on a keyspace-bound session
///
/// Statements always name the table as `keyspace.product`, independent of
/// any session-level default.
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
    keyspace: Keyspace,
}

impl SeaOrmProductRepository {
    /// Fails when the session was opened without a keyspace.
    pub fn new(session: &Session) -> Result<Self, MapperInitializationError> {
        tracing::trace!(session = session.name(), "creating product repository");
        let keyspace = session
            .keyspace()
            .cloned()
            .ok_or_else(|| MapperInitializationError {
                session: session.name().to_owned(),
            })?;

        Ok(Self {
            db: session.connection().clone(),
            keyspace,
        })
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    fn table(&self) -> (Alias, ProductTable) {
        (Alias::new(self.keyspace.as_str()), ProductTable::Table)
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, StorageError> {
        let select = Query::select()
            .columns(COLUMNS)
            .from(self.table())
            .and_where(Expr::col(ProductTable::Id).eq(id))
            .to_owned();

        let row = self
            .db
            .query_one(self.db.get_database_backend().build(&select))
            .await?;

        Ok(row.as_ref().map(Product::from_row).transpose()?)
    }

    async fn save(&self, product: &Product) -> Result<bool, StorageError> {
        let mut insert = Query::insert();
        insert
            .into_table(self.table())
            .columns(COLUMNS)
            .values(product.column_values())
            .map_err(|e| DbErr::Custom(format!("invalid product insert: {e}")))?
            .on_conflict(
                OnConflict::column(ProductTable::Id)
                    .update_column(ProductTable::Description)
                    .to_owned(),
            );

        self.db
            .execute(self.db.get_database_backend().build(&insert))
            .await?;

        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        let delete = Query::delete()
            .from_table(self.table())
            .and_where(Expr::col(ProductTable::Id).eq(id))
            .to_owned();

        self.db
            .execute(self.db.get_database_backend().build(&delete))
            .await?;

        Ok(true)
    }
}
