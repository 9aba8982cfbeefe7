use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{SupplierError, SupplierResult};

/// Exclusive upper bound for storage-assigned supplier ids
pub const SUPPLIER_ID_LIMIT: i64 = 10_000_000_000;

/// Exclusive upper bound for product ids
pub const PRODUCT_ID_LIMIT: i64 = 1_000_000_000_000_000;

const SUPPLIER_ID_FIELD: &str = "supplier id";
const SUPPLIER_ID_MAX: &str = "1e10";
const PRODUCT_ID_FIELD: &str = "product id";
const PRODUCT_ID_MAX: &str = "1e15";

/// Supplier entity.
///
/// Every constructor and mutator re-checks the full invariant set, so a value
/// of this type always has a non-empty name, at least one contact method and
/// a sorted, deduplicated product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(try_from = "Value")]
pub struct Supplier {
    /// Storage-assigned identifier in (0, 1e10)
    id: i64,
    #[validate(length(max = 63))]
    name: String,
    #[validate(length(max = 63))]
    email: Option<String>,
    #[validate(length(max = 63))]
    address: Option<String>,
    /// Product ids in (0, 1e15), ascending and unique
    products: Vec<i64>,
}

/// DTO for creating a new supplier (the id is always assigned by storage)
#[derive(Debug, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct CreateSupplier {
    #[validate(length(max = 63))]
    name: String,
    #[validate(length(max = 63))]
    email: Option<String>,
    #[validate(length(max = 63))]
    address: Option<String>,
    products: Vec<i64>,
}

/// DTO for partially updating a supplier.
///
/// `None` leaves a field untouched. For `email` and `address`, `Some(None)`
/// clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct UpdateSupplier {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    pub products: Option<Vec<i64>>,
}

/// DTO for attaching products to a supplier
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AddProducts {
    pub products: Vec<i64>,
}

/// Query filters for looking up suppliers by attribute.
///
/// A parameter with an empty value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
pub struct SupplierFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    /// Comma-separated product ids; a supplier matches when it carries all of them
    #[serde(default, deserialize_with = "comma_separated_ids")]
    #[param(value_type = Option<String>)]
    #[schema(value_type = Option<String>)]
    pub products: Option<Vec<i64>>,
}

/// Response body for a deleted supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedSupplier {
    pub id: i64,
}

impl Supplier {
    /// Build a supplier from already-typed fields, running every check.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: Option<String>,
        address: Option<String>,
        products: impl IntoIterator<Item = i64>,
    ) -> SupplierResult<Self> {
        check_supplier_id(id)?;
        let supplier = Self {
            id,
            name: name.into(),
            email: normalize_contact(email),
            address: normalize_contact(address),
            products: normalize_products(products)?,
        };
        check_name(&supplier.name)?;
        check_contact(supplier.email.as_deref(), supplier.address.as_deref())?;
        supplier.validate()?;
        Ok(supplier)
    }

    /// Attach a storage-assigned id to a validated creation request.
    pub fn from_create(id: i64, input: CreateSupplier) -> SupplierResult<Self> {
        check_supplier_id(id)?;
        Ok(Self {
            id,
            name: input.name,
            email: input.email,
            address: input.address,
            products: input.products,
        })
    }

    /// Decode a supplier from a plain JSON mapping, re-applying constructor validation.
    pub fn from_value(value: Value) -> SupplierResult<Self> {
        let mut map = as_object(value)?;
        let id = match map.remove("id") {
            None | Some(Value::Null) => {
                return Err(SupplierError::MissingInfo(
                    "Supplier id is required".to_string(),
                ));
            }
            Some(raw) => integer(SUPPLIER_ID_FIELD, SUPPLIER_ID_MAX, &raw)?,
        };
        let name = required_name(&mut map)?;
        let email = take_string(&mut map, "email")?;
        let address = take_string(&mut map, "address")?;
        let products = take_products(&mut map)?.unwrap_or_default();

        Self::new(id, name, email, address, products)
    }

    /// Serialize into a plain JSON mapping
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "address": self.address,
            "products": self.products,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn products(&self) -> &[i64] {
        &self.products
    }

    /// Apply a partial update. On error the supplier is left untouched.
    pub fn apply_update(&mut self, update: UpdateSupplier) -> SupplierResult<()> {
        if update.id.is_some_and(|id| id != self.id) {
            return Err(SupplierError::UserSuppliedId);
        }

        let candidate = Self::new(
            self.id,
            update.name.unwrap_or_else(|| self.name.clone()),
            update.email.unwrap_or_else(|| self.email.clone()),
            update.address.unwrap_or_else(|| self.address.clone()),
            update.products.unwrap_or_else(|| self.products.clone()),
        )?;

        *self = candidate;
        Ok(())
    }

    /// Add products that the supplier does not carry yet.
    ///
    /// Fails with `DuplicateProduct` when any id is already present; the
    /// product list is only modified on success.
    pub fn add_products(&mut self, ids: &[i64]) -> SupplierResult<()> {
        if ids.is_empty() {
            return Err(SupplierError::MissingProductId);
        }
        for id in ids {
            check_product_id(*id)?;
        }

        let duplicates: BTreeSet<i64> = ids
            .iter()
            .copied()
            .filter(|id| self.products.binary_search(id).is_ok())
            .collect();
        if !duplicates.is_empty() {
            return Err(SupplierError::DuplicateProduct(
                duplicates.into_iter().collect(),
            ));
        }

        self.products = normalize_products(self.products.iter().chain(ids).copied())?;
        Ok(())
    }
}

impl TryFrom<Value> for Supplier {
    type Error = SupplierError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl CreateSupplier {
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        address: Option<String>,
        products: impl IntoIterator<Item = i64>,
    ) -> SupplierResult<Self> {
        let input = Self {
            name: name.into(),
            email: normalize_contact(email),
            address: normalize_contact(address),
            products: normalize_products(products)?,
        };
        check_name(&input.name)?;
        check_contact(input.email.as_deref(), input.address.as_deref())?;
        input.validate()?;
        Ok(input)
    }

    /// Decode a creation request body. Any non-null `id` is rejected before
    /// the remaining fields are looked at.
    pub fn from_value(value: Value) -> SupplierResult<Self> {
        let mut map = as_object(value)?;
        if map.get("id").is_some_and(|id| !id.is_null()) {
            return Err(SupplierError::UserSuppliedId);
        }

        let name = required_name(&mut map)?;
        let email = take_string(&mut map, "email")?;
        let address = take_string(&mut map, "address")?;
        let products = take_products(&mut map)?.unwrap_or_default();

        Self::new(name, email, address, products)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn products(&self) -> &[i64] {
        &self.products
    }
}

impl UpdateSupplier {
    /// Decode a partial update body; only type checks happen here; the
    /// invariants are checked against the merged state in `apply_update`.
    pub fn from_value(value: Value) -> SupplierResult<Self> {
        let mut map = as_object(value)?;

        let id = match map.remove("id") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(integer(SUPPLIER_ID_FIELD, SUPPLIER_ID_MAX, &raw)?),
        };
        let name = match map.remove("name") {
            None => None,
            Some(Value::Null) => {
                return Err(SupplierError::MissingInfo(
                    "Supplier name is required".to_string(),
                ));
            }
            Some(Value::String(name)) => Some(name),
            Some(other) => return Err(wrong_type("name", "string", &other)),
        };
        let email = take_nullable_string(&mut map, "email")?;
        let address = take_nullable_string(&mut map, "address")?;
        let products = match map.get("products") {
            Some(Value::Null) => Some(Vec::new()),
            _ => take_products(&mut map)?,
        };

        Ok(Self {
            id,
            name,
            email,
            address,
            products,
        })
    }
}

impl AddProducts {
    pub fn from_value(value: Value) -> SupplierResult<Self> {
        let mut map = as_object(value)?;
        let products = take_products(&mut map)?.ok_or(SupplierError::MissingProductId)?;
        if products.is_empty() {
            return Err(SupplierError::MissingProductId);
        }
        Ok(Self { products })
    }
}

impl SupplierFilter {
    /// Check a supplier against every populated filter attribute
    pub fn matches(&self, supplier: &Supplier) -> bool {
        if self.id.is_some_and(|id| id != supplier.id) {
            return false;
        }
        if self.name.as_deref().is_some_and(|name| name != supplier.name) {
            return false;
        }
        if self
            .email
            .as_deref()
            .is_some_and(|email| Some(email) != supplier.email())
        {
            return false;
        }
        if self
            .address
            .as_deref()
            .is_some_and(|address| Some(address) != supplier.address())
        {
            return false;
        }
        if let Some(products) = &self.products {
            return products
                .iter()
                .all(|id| supplier.products.binary_search(id).is_ok());
        }
        true
    }
}

pub fn check_supplier_id(id: i64) -> SupplierResult<()> {
    if id <= 0 || id >= SUPPLIER_ID_LIMIT {
        return Err(SupplierError::OutOfRange {
            field: SUPPLIER_ID_FIELD,
            max: SUPPLIER_ID_MAX,
            value: id.to_string(),
        });
    }
    Ok(())
}

pub fn check_product_id(id: i64) -> SupplierResult<()> {
    if id <= 0 || id >= PRODUCT_ID_LIMIT {
        return Err(SupplierError::OutOfRange {
            field: PRODUCT_ID_FIELD,
            max: PRODUCT_ID_MAX,
            value: id.to_string(),
        });
    }
    Ok(())
}

fn check_name(name: &str) -> SupplierResult<()> {
    if name.trim().is_empty() {
        return Err(SupplierError::MissingInfo(
            "Supplier name is required".to_string(),
        ));
    }
    Ok(())
}

fn check_contact(email: Option<&str>, address: Option<&str>) -> SupplierResult<()> {
    if email.is_none() && address.is_none() {
        return Err(SupplierError::MissingContactInfo);
    }
    Ok(())
}

/// Blank contact fields are stored as absent
fn normalize_contact(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_products(ids: impl IntoIterator<Item = i64>) -> SupplierResult<Vec<i64>> {
    let mut unique = BTreeSet::new();
    for id in ids {
        check_product_id(id)?;
        unique.insert(id);
    }
    Ok(unique.into_iter().collect())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(field: impl Into<String>, expected: &'static str, found: &Value) -> SupplierError {
    SupplierError::WrongType {
        field: field.into(),
        expected,
        found: json_type(found),
    }
}

fn as_object(value: Value) -> SupplierResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(wrong_type("request body", "object", &other)),
    }
}

fn integer(field: &'static str, max: &'static str, value: &Value) -> SupplierResult<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            // Positive integers beyond i64 are well-typed but can never be in range
            None if n.is_u64() => Err(SupplierError::OutOfRange {
                field,
                max,
                value: n.to_string(),
            }),
            None => Err(wrong_type(field, "integer", value)),
        },
        other => Err(wrong_type(field, "integer", other)),
    }
}

fn required_name(map: &mut Map<String, Value>) -> SupplierResult<String> {
    take_string(map, "name")?
        .ok_or_else(|| SupplierError::MissingInfo("Supplier name is required".to_string()))
}

fn take_string(map: &mut Map<String, Value>, field: &str) -> SupplierResult<Option<String>> {
    match map.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(wrong_type(field, "string", &other)),
    }
}

fn take_nullable_string(
    map: &mut Map<String, Value>,
    field: &str,
) -> SupplierResult<Option<Option<String>>> {
    match map.remove(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(value)) => Ok(Some(Some(value))),
        Some(other) => Err(wrong_type(field, "string", &other)),
    }
}

fn take_products(map: &mut Map<String, Value>) -> SupplierResult<Option<Vec<i64>>> {
    match map.remove("products") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| integer(PRODUCT_ID_FIELD, PRODUCT_ID_MAX, item))
            .collect::<SupplierResult<Vec<_>>>()
            .map(Some),
        Some(other) => Err(wrong_type("products", "array", &other)),
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

fn comma_separated_ids<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(list) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let ids = list
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i64>().map_err(serde::de::Error::custom))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((!ids.is_empty()).then_some(ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tom() -> Supplier {
        Supplier::new(
            1,
            "Tom",
            Some("t@x.com".to_string()),
            None,
            vec![3, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn test_create_sorts_and_deduplicates_products() {
        let input = CreateSupplier::from_value(json!({
            "name": "Tom",
            "email": "t@x.com",
            "products": [3, 1, 2, 3, 1]
        }))
        .unwrap();

        assert_eq!(input.products(), &[1, 2, 3]);
    }

    #[test]
    fn test_products_equal_sorted_unique_input() {
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![5, 4, 3, 2, 1],
            vec![7, 7, 7],
            vec![999_999_999_999_999, 1, 500],
        ];

        for ids in cases {
            let supplier =
                Supplier::new(1, "acme", None, Some("Chicago".to_string()), ids.clone()).unwrap();
            let mut expected = ids;
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(supplier.products(), expected.as_slice());
        }
    }

    #[test]
    fn test_contact_invariant_on_construction() {
        let contacts = [
            (None, None),
            (Some(""), None),
            (None, Some("")),
            (Some(""), Some("   ")),
            (Some("a@b.c"), None),
            (None, Some("NYC")),
            (Some("a@b.c"), Some("NYC")),
        ];

        for (email, address) in contacts {
            let result = CreateSupplier::new(
                "acme",
                email.map(str::to_string),
                address.map(str::to_string),
                vec![],
            );
            match result {
                Ok(input) => assert!(input.email().is_some() || input.address().is_some()),
                Err(err) => assert!(matches!(err, SupplierError::MissingContactInfo)),
            }
        }
    }

    #[test]
    fn test_user_supplied_id_always_fails() {
        let bodies = [
            json!({"id": 4, "name": "Tom", "email": "t@x.com"}),
            json!({"id": "abc"}),
            json!({"id": 0, "name": 5}),
            json!({"id": 12, "name": "Tom"}),
        ];

        for body in bodies {
            let result = CreateSupplier::from_value(body);
            assert!(matches!(result, Err(SupplierError::UserSuppliedId)));
        }
    }

    #[test]
    fn test_null_id_is_treated_as_absent() {
        let input =
            CreateSupplier::from_value(json!({"id": null, "name": "Tom", "address": "usa"}));
        assert!(input.is_ok());
    }

    #[test]
    fn test_missing_name() {
        let result = CreateSupplier::from_value(json!({"email": "t@x.com"}));
        assert!(matches!(result, Err(SupplierError::MissingInfo(_))));

        let result = CreateSupplier::from_value(json!({"name": "", "email": "t@x.com"}));
        assert!(matches!(result, Err(SupplierError::MissingInfo(_))));
    }

    #[test]
    fn test_wrong_types() {
        let cases = [
            (json!({"name": 177013, "email": "t@x.com"}), "name"),
            (json!({"name": "Tom", "email": 5}), "email"),
            (json!({"name": "Tom", "email": "t@x.com", "address": []}), "address"),
            (json!({"name": "Tom", "email": "t@x.com", "products": "1,2"}), "products"),
            (json!({"name": "Tom", "email": "t@x.com", "products": [1.5]}), "product id"),
            (json!({"name": "Tom", "email": "t@x.com", "products": ["1"]}), "product id"),
            (json!(["Tom"]), "request body"),
        ];

        for (body, expected_field) in cases {
            match CreateSupplier::from_value(body) {
                Err(SupplierError::WrongType { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected WrongType for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_product_ids_out_of_range() {
        for id in [0_i64, -3, PRODUCT_ID_LIMIT] {
            let result = CreateSupplier::new("acme", Some("a@b.c".to_string()), None, vec![id]);
            assert!(matches!(result, Err(SupplierError::OutOfRange { .. })));
        }

        let result = CreateSupplier::from_value(json!({
            "name": "acme",
            "email": "a@b.c",
            "products": [u64::MAX]
        }));
        assert!(matches!(result, Err(SupplierError::OutOfRange { .. })));
    }

    #[test]
    fn test_supplier_id_out_of_range() {
        for id in [0_i64, -1, SUPPLIER_ID_LIMIT] {
            let result = Supplier::new(id, "acme", Some("a@b.c".to_string()), None, vec![]);
            assert!(matches!(result, Err(SupplierError::OutOfRange { .. })));
        }
        let max_id = Supplier::new(
            SUPPLIER_ID_LIMIT - 1,
            "acme",
            Some("a@b.c".to_string()),
            None,
            vec![],
        );
        assert!(max_id.is_ok());
    }

    #[test]
    fn test_field_length_limit() {
        let result = CreateSupplier::new("x".repeat(64), Some("a@b.c".to_string()), None, vec![]);
        assert!(matches!(result, Err(SupplierError::Validation(_))));

        let result = CreateSupplier::new("x".repeat(63), Some("a@b.c".to_string()), None, vec![]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_value_round_trip() {
        let suppliers = [
            tom(),
            Supplier::new(2, "Depot", None, Some("Chicago".to_string()), vec![]).unwrap(),
            Supplier::new(
                SUPPLIER_ID_LIMIT - 1,
                "n".repeat(63),
                Some("e".repeat(63)),
                Some("a".repeat(63)),
                vec![1, PRODUCT_ID_LIMIT - 1],
            )
            .unwrap(),
        ];

        for supplier in suppliers {
            let decoded = Supplier::from_value(supplier.to_value()).unwrap();
            assert_eq!(decoded, supplier);

            let text = serde_json::to_string(&supplier).unwrap();
            let decoded: Supplier = serde_json::from_str(&text).unwrap();
            assert_eq!(decoded, supplier);
            assert_eq!(serde_json::to_value(&supplier).unwrap(), supplier.to_value());
        }
    }

    #[test]
    fn test_deserialize_reapplies_validation() {
        let result: Result<Supplier, _> = serde_json::from_value(json!({
            "id": 1,
            "name": "Tom",
            "email": null,
            "address": null,
            "products": []
        }));
        assert!(result.is_err());

        let result = Supplier::from_value(json!({"name": "Tom", "email": "t@x.com"}));
        assert!(matches!(result, Err(SupplierError::MissingInfo(_))));
    }

    #[test]
    fn test_update_overwrites_only_supplied_fields() {
        let mut supplier = tom();
        supplier
            .apply_update(UpdateSupplier {
                address: Some(Some("NYC".to_string())),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(supplier.name(), "Tom");
        assert_eq!(supplier.email(), Some("t@x.com"));
        assert_eq!(supplier.address(), Some("NYC"));
        assert_eq!(supplier.products(), &[1, 2, 3]);
    }

    #[test]
    fn test_update_clearing_only_contact_fails_and_keeps_state() {
        let mut supplier = tom();
        let update = UpdateSupplier::from_value(json!({"email": ""})).unwrap();

        let result = supplier.apply_update(update);

        assert!(matches!(result, Err(SupplierError::MissingContactInfo)));
        assert_eq!(supplier.email(), Some("t@x.com"));
        assert_eq!(supplier, tom());
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut supplier = tom();
        let update = UpdateSupplier {
            name: Some("Tim".to_string()),
            products: Some(vec![4, 0]),
            ..Default::default()
        };

        assert!(supplier.apply_update(update).is_err());
        assert_eq!(supplier, tom());
    }

    #[test]
    fn test_update_id_must_match() {
        let mut supplier = tom();

        let same = UpdateSupplier::from_value(json!({"id": 1, "name": "Tim"})).unwrap();
        supplier.apply_update(same).unwrap();
        assert_eq!(supplier.name(), "Tim");

        let other = UpdateSupplier::from_value(json!({"id": 2})).unwrap();
        assert!(matches!(
            supplier.apply_update(other),
            Err(SupplierError::UserSuppliedId)
        ));
    }

    #[test]
    fn test_update_decoding() {
        let update = UpdateSupplier::from_value(json!({
            "address": null,
            "products": null
        }))
        .unwrap();
        assert_eq!(update.address, Some(None));
        assert_eq!(update.products, Some(vec![]));
        assert_eq!(update.email, None);

        let result = UpdateSupplier::from_value(json!({"name": null}));
        assert!(matches!(result, Err(SupplierError::MissingInfo(_))));

        let result = UpdateSupplier::from_value(json!({"products": [true]}));
        assert!(matches!(result, Err(SupplierError::WrongType { .. })));
    }

    #[test]
    fn test_add_products_unions_and_sorts() {
        let mut supplier = tom();
        supplier.add_products(&[10, 5, 5]).unwrap();
        assert_eq!(supplier.products(), &[1, 2, 3, 5, 10]);
    }

    #[test]
    fn test_add_duplicate_products_fails_and_keeps_state() {
        let mut supplier = tom();

        let result = supplier.add_products(&[9, 2, 3]);

        match result {
            Err(SupplierError::DuplicateProduct(ids)) => assert_eq!(ids, vec![2, 3]),
            other => panic!("expected DuplicateProduct, got {other:?}"),
        }
        assert_eq!(supplier, tom());
    }

    #[test]
    fn test_add_products_requires_ids() {
        let mut supplier = tom();
        assert!(matches!(
            supplier.add_products(&[]),
            Err(SupplierError::MissingProductId)
        ));
        assert!(matches!(
            AddProducts::from_value(json!({})),
            Err(SupplierError::MissingProductId)
        ));
        assert!(matches!(
            AddProducts::from_value(json!({"products": []})),
            Err(SupplierError::MissingProductId)
        ));
        assert!(matches!(
            AddProducts::from_value(json!({"products": 4})),
            Err(SupplierError::WrongType { .. })
        ));
    }

    #[test]
    fn test_filter_matches() {
        let supplier = tom();

        assert!(SupplierFilter::default().matches(&supplier));
        assert!(
            SupplierFilter {
                name: Some("Tom".to_string()),
                products: Some(vec![1, 3]),
                ..Default::default()
            }
            .matches(&supplier)
        );
        assert!(
            !SupplierFilter {
                products: Some(vec![1, 4]),
                ..Default::default()
            }
            .matches(&supplier)
        );
        assert!(
            !SupplierFilter {
                address: Some("NYC".to_string()),
                ..Default::default()
            }
            .matches(&supplier)
        );
        assert!(
            !SupplierFilter {
                id: Some(2),
                ..Default::default()
            }
            .matches(&supplier)
        );
    }

    fn filter_from(uri: &str) -> SupplierFilter {
        let uri: axum::http::Uri = uri.parse().unwrap();
        axum::extract::Query::<SupplierFilter>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_filter_empty_values_are_absent() {
        let filter = filter_from("/?id=&name=&email=&address=&products=");
        assert_eq!(filter, SupplierFilter::default());

        let filter = filter_from("/?products=,");
        assert_eq!(filter.products, None);
    }

    #[test]
    fn test_filter_query_decoding() {
        let filter = filter_from("/?id=4&email=t%40x.com&products=3,1");
        assert_eq!(filter.id, Some(4));
        assert_eq!(filter.email.as_deref(), Some("t@x.com"));
        assert_eq!(filter.products, Some(vec![3, 1]));

        let uri: axum::http::Uri = "/?id=abc".parse().unwrap();
        assert!(axum::extract::Query::<SupplierFilter>::try_from_uri(&uri).is_err());
    }
}
