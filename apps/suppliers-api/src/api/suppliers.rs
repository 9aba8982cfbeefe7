use axum::Router;
use domain_suppliers::{
    InMemorySupplierRepository, PgSupplierRepository, SupplierService, handlers,
};

use crate::state::AppState;

/// Supplier routes on whichever store the state was built with
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgSupplierRepository::new(db.clone());
            handlers::router(SupplierService::new(repository))
        }
        None => {
            let repository = InMemorySupplierRepository::new();
            handlers::router(SupplierService::new(repository))
        }
    }
}
