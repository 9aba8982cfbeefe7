use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::SupplierResult;
use crate::models::{CreateSupplier, Supplier, SupplierFilter};

/// Repository trait for Supplier persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Persist a new supplier, assigning its id
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier>;

    /// Get a supplier by ID
    async fn find_by_id(&self, id: i64) -> SupplierResult<Option<Supplier>>;

    /// Suppliers matching every populated filter attribute, ordered by id
    async fn find_by_attributes(&self, filter: SupplierFilter) -> SupplierResult<Vec<Supplier>>;

    /// Overwrite a stored supplier; `None` when it no longer exists
    async fn update(&self, supplier: Supplier) -> SupplierResult<Option<Supplier>>;

    /// Delete a supplier by ID
    async fn delete(&self, id: i64) -> SupplierResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    suppliers: BTreeMap<i64, Supplier>,
}

/// In-memory implementation of SupplierRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySupplierRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let mut store = self.store.write().await;

        // Ids are never reused, even after a delete
        let id = store.last_id + 1;
        let supplier = Supplier::from_create(id, input)?;
        store.last_id = id;
        store.suppliers.insert(id, supplier.clone());

        tracing::info!(supplier_id = id, "Created supplier");
        Ok(supplier)
    }

    async fn find_by_id(&self, id: i64) -> SupplierResult<Option<Supplier>> {
        let store = self.store.read().await;
        Ok(store.suppliers.get(&id).cloned())
    }

    async fn find_by_attributes(&self, filter: SupplierFilter) -> SupplierResult<Vec<Supplier>> {
        let store = self.store.read().await;

        Ok(store
            .suppliers
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }

    async fn update(&self, supplier: Supplier) -> SupplierResult<Option<Supplier>> {
        let mut store = self.store.write().await;

        match store.suppliers.get_mut(&supplier.id()) {
            Some(slot) => {
                *slot = supplier.clone();
                tracing::info!(supplier_id = supplier.id(), "Updated supplier");
                Ok(Some(supplier))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> SupplierResult<bool> {
        let mut store = self.store.write().await;

        if store.suppliers.remove(&id).is_some() {
            tracing::info!(supplier_id = id, "Deleted supplier");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
