use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::SupplierResult,
    models::{CreateSupplier, Supplier, SupplierFilter},
    repository::SupplierRepository,
};

pub struct PgSupplierRepository {
    db: DatabaseConnection,
}

impl PgSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(supplier_id = model.id, "Created supplier");
        model.try_into()
    }

    async fn find_by_id(&self, id: i64) -> SupplierResult<Option<Supplier>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        model.map(Supplier::try_from).transpose()
    }

    async fn find_by_attributes(&self, filter: SupplierFilter) -> SupplierResult<Vec<Supplier>> {
        let mut query = entity::Entity::find();

        if let Some(id) = filter.id {
            query = query.filter(entity::Column::Id.eq(id));
        }
        if let Some(name) = filter.name {
            query = query.filter(entity::Column::Name.eq(name));
        }
        if let Some(email) = filter.email {
            query = query.filter(entity::Column::Email.eq(email));
        }
        if let Some(address) = filter.address {
            query = query.filter(entity::Column::Address.eq(address));
        }
        if let Some(products) = filter.products {
            // JSONB containment: every requested id must be in the row's array
            query = query.filter(Expr::cust_with_values(
                "\"products\" @> ?",
                [entity::products_json(&products)],
            ));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Supplier::try_from).collect()
    }

    async fn update(&self, supplier: Supplier) -> SupplierResult<Option<Supplier>> {
        match entity::update_model(&supplier).update(&self.db).await {
            Ok(model) => {
                tracing::info!(supplier_id = model.id, "Updated supplier");
                model.try_into().map(Some)
            }
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> SupplierResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(supplier_id = id, "Deleted supplier");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
