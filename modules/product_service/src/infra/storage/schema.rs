//! Keyspace and table bootstrap
//!
//! Every statement is guarded by `IF NOT EXISTS`, so running the bootstrap
//! again against a provisioned store changes nothing. No migration history
//! table is written.

use sea_orm::sea_query::{Alias, ColumnDef, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbBackend};

use super::entity::ProductTable;
use crate::contract::{Keyspace, SchemaProvisioningError};

/// Ensure `keyspace` and its product table exist.
///
/// Must run once, on the admin connection, before the data session is used.
pub async fn ensure_schema<C>(admin: &C, keyspace: &Keyspace) -> Result<(), SchemaProvisioningError>
where
    C: ConnectionTrait,
{
    let backend = admin.get_database_backend();
    let statement_failed = |source| SchemaProvisioningError::Statement {
        keyspace: keyspace.clone(),
        source,
    };

    tracing::debug!(%keyspace, "creating keyspace");
    admin
        .execute_unprepared(&create_keyspace_sql(backend, keyspace)?)
        .await
        .map_err(statement_failed)?;

    tracing::debug!(%keyspace, "creating product table");
    admin
        .execute(backend.build(&create_table_statement(keyspace)))
        .await
        .map_err(statement_failed)?;

    tracing::info!(%keyspace, ?backend, "product schema ready");
    Ok(())
}

/// Namespace DDL for the admin connection's backend.
///
/// Both supported backends place the namespace on the single node they run
/// on, which is the replication-factor-1 layout the service expects.
pub fn create_keyspace_sql(
    backend: DbBackend,
    keyspace: &Keyspace,
) -> Result<String, SchemaProvisioningError> {
    match backend {
        DbBackend::Postgres => Ok(format!("CREATE SCHEMA IF NOT EXISTS \"{keyspace}\"")),
        DbBackend::MySql => Ok(format!("CREATE DATABASE IF NOT EXISTS `{keyspace}`")),
        other => Err(SchemaProvisioningError::UnsupportedBackend { backend: other }),
    }
}

/// `product(id integer PRIMARY KEY, description text)` inside `keyspace`
pub fn create_table_statement(keyspace: &Keyspace) -> TableCreateStatement {
    Table::create()
        .table((Alias::new(keyspace.as_str()), ProductTable::Table))
        .if_not_exists()
        .col(
            ColumnDef::new(ProductTable::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(ProductTable::Description).text())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{MysqlQueryBuilder, PostgresQueryBuilder};

    fn keyspace() -> Keyspace {
        Keyspace::new("demo").unwrap()
    }

    #[test]
    fn keyspace_ddl_per_backend() {
        assert_eq!(
            create_keyspace_sql(DbBackend::Postgres, &keyspace()).unwrap(),
            r#"CREATE SCHEMA IF NOT EXISTS "demo""#
        );
        assert_eq!(
            create_keyspace_sql(DbBackend::MySql, &keyspace()).unwrap(),
            "CREATE DATABASE IF NOT EXISTS `demo`"
        );
    }

    #[test]
    fn sqlite_has_no_keyspaces() {
        let err = create_keyspace_sql(DbBackend::Sqlite, &keyspace()).unwrap_err();
        assert!(matches!(
            err,
            SchemaProvisioningError::UnsupportedBackend {
                backend: DbBackend::Sqlite
            }
        ));
    }

    #[test]
    fn table_ddl_is_guarded_and_qualified() {
        let pg = create_table_statement(&keyspace()).to_string(PostgresQueryBuilder);
        assert!(pg.starts_with(r#"CREATE TABLE IF NOT EXISTS "demo"."product""#), "{pg}");
        assert!(pg.contains(r#""id" integer NOT NULL PRIMARY KEY"#), "{pg}");
        assert!(pg.contains(r#""description" text"#), "{pg}");

        let mysql = create_table_statement(&keyspace()).to_string(MysqlQueryBuilder);
        assert!(mysql.starts_with("CREATE TABLE IF NOT EXISTS `demo`.`product`"), "{mysql}");
    }
}
