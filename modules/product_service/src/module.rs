//! Module declaration and lifecycle
//!
//! Startup order: [`ProductServiceModule::migrate`] on the admin connection,
//! then [`ProductServiceModule::init`] with the keyspace-bound data session,
//! then [`ProductServiceModule::register_rest`].

use crate::config::Config;
use crate::contract::{MapperInitializationError, ProductApi, SchemaProvisioningError};
use crate::domain::ProductService;
use crate::infra::storage::{ensure_schema, SeaOrmProductRepository, Session};
use sea_orm::ConnectionTrait;
use std::sync::Arc;

/// Product service module
pub struct ProductServiceModule {
    config: Config,
    service: Arc<ProductService>,
}

impl ProductServiceModule {
    /// Provision the keyspace and product table
    pub async fn migrate<C>(admin: &C, config: &Config) -> Result<(), SchemaProvisioningError>
    where
        C: ConnectionTrait,
    {
        ensure_schema(admin, &config.keyspace).await?;
        tracing::info!("Product service migrations completed");
        Ok(())
    }

    /// Build repository and service on top of `session`
    pub fn init(session: &Session, config: Config) -> Result<Self, MapperInitializationError> {
        let repo = SeaOrmProductRepository::new(session)?;
        if repo.keyspace() != &config.keyspace {
            tracing::warn!(
                configured = %config.keyspace,
                bound = %repo.keyspace(),
                "data session keyspace differs from configured keyspace"
            );
        }

        let service = Arc::new(ProductService::new(Arc::new(repo), &config.your_setting));

        tracing::info!(keyspace = %config.keyspace, "Product service initialized");
        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// In-process client
    pub fn client(&self) -> Arc<dyn ProductApi> {
        self.service.clone()
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering product service REST routes");
        crate::api::rest::routes::register_routes(router, self.client())
    }
}
