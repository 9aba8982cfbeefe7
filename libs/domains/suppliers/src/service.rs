use std::sync::Arc;
use tracing::instrument;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{AddProducts, CreateSupplier, Supplier, SupplierFilter, UpdateSupplier};
use crate::repository::SupplierRepository;

/// Service layer for Supplier business logic
#[derive(Clone)]
pub struct SupplierService<R: SupplierRepository> {
    repository: Arc<R>,
}

impl<R: SupplierRepository> SupplierService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist an already validated supplier
    #[instrument(skip(self, input), fields(name = %input.name()))]
    pub async fn create_supplier(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        self.repository.create(input).await
    }

    /// Get a supplier by ID
    #[instrument(skip(self))]
    pub async fn get_supplier(&self, id: i64) -> SupplierResult<Supplier> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SupplierError::NotFound(id))
    }

    /// Suppliers matching the filter, or all of them for an empty filter
    #[instrument(skip(self))]
    pub async fn find_suppliers(&self, filter: SupplierFilter) -> SupplierResult<Vec<Supplier>> {
        self.repository.find_by_attributes(filter).await
    }

    /// Apply a partial update; nothing is written when the merged state is invalid
    #[instrument(skip(self, update))]
    pub async fn update_supplier(
        &self,
        id: i64,
        update: UpdateSupplier,
    ) -> SupplierResult<Supplier> {
        let mut supplier = self.get_supplier(id).await?;
        supplier.apply_update(update)?;
        self.persist(supplier).await
    }

    /// Attach new products; fails without writing when any id is already present
    #[instrument(skip(self, input))]
    pub async fn add_products(&self, id: i64, input: AddProducts) -> SupplierResult<Supplier> {
        let mut supplier = self.get_supplier(id).await?;
        supplier.add_products(&input.products)?;
        self.persist(supplier).await
    }

    /// Delete a supplier
    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: i64) -> SupplierResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(SupplierError::NotFound(id));
        }

        Ok(())
    }

    // The row can disappear between the read and the write
    async fn persist(&self, supplier: Supplier) -> SupplierResult<Supplier> {
        let id = supplier.id();
        self.repository
            .update(supplier)
            .await?
            .ok_or(SupplierError::NotFound(id))
    }
}
