//! Resource cleanup run during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "suppliers").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_close_mock_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        close_postgres(db, "test").await;
    }
}
