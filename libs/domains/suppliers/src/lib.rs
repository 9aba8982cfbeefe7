//! Suppliers Domain
//!
//! Supplier records (name, contact info, product ids) with their validation
//! rules, persistence and HTTP endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON decoding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Load, mutate a copy, persist on success
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Supplier entity, DTOs, invariants
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_suppliers::{
//!     handlers,
//!     repository::InMemorySupplierRepository,
//!     service::SupplierService,
//! };
//!
//! let repository = InMemorySupplierRepository::new();
//! let service = SupplierService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{SupplierError, SupplierResult};
pub use models::{
    AddProducts, CreateSupplier, DeletedSupplier, PRODUCT_ID_LIMIT, SUPPLIER_ID_LIMIT, Supplier,
    SupplierFilter, UpdateSupplier,
};
pub use postgres::PgSupplierRepository;
pub use repository::{InMemorySupplierRepository, SupplierRepository};
pub use service::SupplierService;
