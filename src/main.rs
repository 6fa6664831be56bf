use std::sync::Arc;

use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn};

use school_locator::config::AppConfig;
use school_locator::database::school_repo;
use school_locator::database::school_store::SqliteSchoolStore;
use school_locator::logging;
use school_locator::services::school_service::SchoolService;
use school_locator::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env()?;

    info!(database_url = %config.database_url, "connecting to database");
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    school_repo::ensure_schools_table(&pool).await?;

    let service = SchoolService::new(Arc::new(SqliteSchoolStore::new(pool)));
    let app = web::build_router(service);

    let listener = match TcpListener::bind(config.socket_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                addr = %config.socket_addr(),
                error = %e,
                fallback = %config.fallback_socket_addr(),
                "bind failed, trying fallback port"
            );
            TcpListener::bind(config.fallback_socket_addr()).await?
        }
    };

    info!(addr = %listener.local_addr()?, "server is running");
    axum::serve(listener, app).await?;
    Ok(())
}
