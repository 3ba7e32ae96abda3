//! Database sessions
//!
//! The admin connection is unscoped and only used for schema statements. The
//! data session is bound to a keyspace: `search_path` on PostgreSQL, the
//! database path on MySQL.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use url::Url;

use crate::config::DatabaseConfig;
use crate::contract::Keyspace;

/// Open the unscoped connection used for schema provisioning
pub async fn connect_admin(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.admin_url.as_deref().unwrap_or(&config.url);
    tracing::debug!("opening admin connection");
    Database::connect(pool_options(config, url.to_owned())).await
}

/// Data connection together with the keyspace it is bound to
#[derive(Clone, Debug)]
pub struct Session {
    name: String,
    conn: DatabaseConnection,
    keyspace: Option<Keyspace>,
}

impl Session {
    /// Wrap an existing connection. `keyspace` must reflect what the
    /// connection is actually bound to.
    pub fn new(
        name: impl Into<String>,
        conn: DatabaseConnection,
        keyspace: Option<Keyspace>,
    ) -> Self {
        Self {
            name: name.into(),
            conn,
            keyspace,
        }
    }

    /// Open a pooled connection bound to `keyspace`.
    ///
    /// Backends without namespaces yield a session with no keyspace, which
    /// the repository refuses at construction.
    pub async fn connect(
        name: impl Into<String>,
        config: &DatabaseConfig,
        keyspace: &Keyspace,
    ) -> Result<Self, DbErr> {
        let name = name.into();
        let (options, keyspace) = bound_options(config, keyspace)?;
        if keyspace.is_none() {
            tracing::warn!(session = %name, "backend has no keyspaces; session left unbound");
        }

        let conn = Database::connect(options).await?;
        tracing::info!(session = %name, keyspace = ?keyspace, "data session connected");

        Ok(Self::new(name, conn, keyspace))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keyspace this session is bound to, if any
    pub fn keyspace(&self) -> Option<&Keyspace> {
        self.keyspace.as_ref()
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Release the pool
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!(session = %self.name, "closing data session");
        self.conn.close().await
    }
}

/// Pool options for a data session on `keyspace`, with the keyspace the
/// session ends up bound to. Schemes without namespaces keep the configured
/// URL and bind nothing.
fn bound_options(
    config: &DatabaseConfig,
    keyspace: &Keyspace,
) -> Result<(ConnectOptions, Option<Keyspace>), DbErr> {
    let mut url = Url::parse(&config.url)
        .map_err(|e| DbErr::Custom(format!("invalid database url: {e}")))?;

    match url.scheme() {
        "postgres" | "postgresql" => {
            let mut options = pool_options(config, url.to_string());
            options.set_schema_search_path(keyspace.as_str());
            Ok((options, Some(keyspace.clone())))
        }
        "mysql" | "mariadb" => {
            url.set_path(&format!("/{keyspace}"));
            Ok((pool_options(config, url.to_string()), Some(keyspace.clone())))
        }
        _ => Ok((pool_options(config, config.url.clone()), None)),
    }
}

fn pool_options(config: &DatabaseConfig, url: String) -> ConnectOptions {
    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn reports_bound_keyspace() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let session = Session::new("data", conn, Some(Keyspace::new("shop").unwrap()));

        assert_eq!(session.name(), "data");
        assert_eq!(session.keyspace().map(Keyspace::as_str), Some("shop"));
    }

    fn database(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..DatabaseConfig::default()
        }
    }

    fn demo() -> Keyspace {
        Keyspace::new("demo").unwrap()
    }

    #[test]
    fn postgres_binds_search_path_and_keeps_database() {
        let url = "postgres://app:secret@db:5432/postgres";
        let (options, keyspace) = bound_options(&database(url), &demo()).unwrap();

        assert_eq!(options.get_url(), url);
        assert_eq!(
            options.get_schema_search_path().map(String::as_str),
            Some("demo")
        );
        assert_eq!(keyspace, Some(demo()));
    }

    #[test]
    fn mysql_connects_to_keyspace_database() {
        let (options, keyspace) =
            bound_options(&database("mysql://u@h:3306/other"), &demo()).unwrap();

        assert_eq!(options.get_url(), "mysql://u@h:3306/demo");
        assert!(options.get_schema_search_path().is_none());
        assert_eq!(keyspace, Some(demo()));
    }

    #[test]
    fn sqlite_leaves_session_unbound() {
        let (options, keyspace) =
            bound_options(&database("sqlite::memory:"), &demo()).unwrap();

        assert_eq!(options.get_url(), "sqlite::memory:");
        assert!(keyspace.is_none());
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(matches!(
            bound_options(&database("not a url"), &demo()),
            Err(DbErr::Custom(_))
        ));
    }

    #[test]
    fn unbound_session_has_no_keyspace() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let session = Session::new("admin", conn, None);

        assert!(session.keyspace().is_none());
    }
}
