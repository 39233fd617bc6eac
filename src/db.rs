//! Database connection management
//!
//! Builds the connection pool and hosts one service per resource.

pub mod checklists;
pub mod diseases;
pub mod inventory;
pub mod patients;
pub mod schema;
pub mod surgeries;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::{info, warn};

/// Create the connection pool and verify it with a test query.
///
/// Startup fails hard if the database is unreachable.
pub async fn connect(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let pool = create_pool(config)?;

    let client = pool.get().await?;
    client.query_one("SELECT 1", &[]).await?;
    drop(client);

    info!("Database connection established (TLS: {})", config.ssl);
    Ok(pool)
}

/// Create a connection pool with the given configuration
fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    if config.ssl {
        let certs = rustls_native_certs::load_native_certs();
        if !certs.errors.is_empty() {
            warn!(
                "Failed to load {} native root certificate(s): {:?}",
                certs.errors.len(),
                certs.errors
            );
        }

        let mut root_store = rustls::RootCertStore::empty();
        let mut rejected = 0;
        for cert in certs.certs {
            if root_store.add(cert).is_err() {
                rejected += 1;
            }
        }
        if rejected > 0 {
            warn!("{} native root certificate(s) were rejected", rejected);
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);
        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}
