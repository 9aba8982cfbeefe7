use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SupplierError;
use crate::models::{CreateSupplier, Supplier};

/// Sea-ORM Entity for the suppliers table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub products: Json, // JSONB array of product ids
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Rows are re-validated on load
impl TryFrom<Model> for Supplier {
    type Error = SupplierError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let products: Vec<i64> = serde_json::from_value(model.products).map_err(|e| {
            SupplierError::Internal(format!(
                "Stored products of supplier {} are malformed: {}",
                model.id, e
            ))
        })?;

        Supplier::new(model.id, model.name, model.email, model.address, products)
    }
}

impl From<CreateSupplier> for ActiveModel {
    fn from(input: CreateSupplier) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            id: NotSet,
            name: Set(input.name().to_string()),
            email: Set(input.email().map(str::to_string)),
            address: Set(input.address().map(str::to_string)),
            products: Set(products_json(input.products())),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Active model carrying every mutable column of an existing supplier
pub fn update_model(supplier: &Supplier) -> ActiveModel {
    ActiveModel {
        id: Set(supplier.id()),
        name: Set(supplier.name().to_string()),
        email: Set(supplier.email().map(str::to_string)),
        address: Set(supplier.address().map(str::to_string)),
        products: Set(products_json(supplier.products())),
        created_at: NotSet,
        updated_at: Set(chrono::Utc::now().into()),
    }
}

pub fn products_json(products: &[i64]) -> Json {
    Json::Array(products.iter().map(|id| Json::from(*id)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(products: Json) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: 7,
            name: "acme".to_string(),
            email: None,
            address: Some("Chicago".to_string()),
            products,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn test_model_into_supplier() {
        let supplier = Supplier::try_from(model(serde_json::json!([2, 1]))).unwrap();
        assert_eq!(supplier.id(), 7);
        assert_eq!(supplier.products(), &[1, 2]);
        assert_eq!(supplier.address(), Some("Chicago"));
    }

    #[test]
    fn test_malformed_products_column() {
        let result = Supplier::try_from(model(serde_json::json!({"not": "a list"})));
        assert!(matches!(result, Err(SupplierError::Internal(_))));
    }

    #[test]
    fn test_create_leaves_id_to_database() {
        let input =
            CreateSupplier::new("acme", Some("a@b.c".to_string()), None, vec![9, 3]).unwrap();
        let active: ActiveModel = input.into();

        assert!(matches!(active.id, NotSet));
        assert_eq!(active.products.unwrap(), serde_json::json!([3, 9]));
    }
}
