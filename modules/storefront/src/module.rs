//! Module declaration and bootstrap
//!
//! Connects to the database, applies migrations and wires repositories into the
//! domain service and its native client.

use crate::config::Config;
use crate::contract::StorefrontApi;
use crate::domain::{Repositories, Service};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmDiscountRepository, SeaOrmOrderRepository,
    SeaOrmProductRepository, SeaOrmReviewRepository, SeaOrmUserRepository,
};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Storefront store module
pub struct StorefrontModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl StorefrontModule {
    /// Connect using `config` and, if enabled, bring the schema up to date
    pub async fn init(config: Config) -> Result<Self> {
        let (min, max) = config.pool_bounds();
        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.max_connections(max)
            .min_connections(min)
            .connect_timeout(config.connect_timeout())
            .sqlx_logging(config.sqlx_logging);
        if let Some(lifetime) = config.pinned_connection_lifetime() {
            opts.max_lifetime(lifetime).idle_timeout(lifetime);
        }

        let db = Database::connect(opts)
            .await
            .context("Failed to connect to the storefront database")?;
        tracing::info!(max_connections = max, "Storefront database connected");

        let module = Self::with_connection(config, Arc::new(db));
        if module.config.run_migrations {
            module.migrate().await?;
        }
        Ok(module)
    }

    /// Wire the module around an existing connection without touching the schema
    pub fn with_connection(config: Config, db: Arc<DatabaseConnection>) -> Self {
        let repos = Repositories {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            categories: Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            products: Arc::new(SeaOrmProductRepository::new(db.clone())),
            discounts: Arc::new(SeaOrmDiscountRepository::new(db.clone())),
            orders: Arc::new(SeaOrmOrderRepository::new(db.clone())),
            reviews: Arc::new(SeaOrmReviewRepository::new(db.clone())),
        };
        let service = Arc::new(Service::new(repos));

        Self { config, db, service }
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None)
            .await
            .context("Failed to apply storefront migrations")?;
        tracing::info!("Storefront migrations completed");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn StorefrontApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}
