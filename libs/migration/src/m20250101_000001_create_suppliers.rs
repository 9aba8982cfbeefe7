use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create suppliers table
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::Name).string_len(63).not_null())
                    .col(ColumnDef::new(Suppliers::Email).string_len(63).null())
                    .col(ColumnDef::new(Suppliers::Address).string_len(63).null())
                    .col(
                        ColumnDef::new(Suppliers::Products)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        timestamp_with_time_zone(Suppliers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Suppliers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // A supplier must be reachable by email or address
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE suppliers
                    ADD CONSTRAINT suppliers_contact_check
                    CHECK (NOT (email IS NULL AND address IS NULL))
                "#,
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_suppliers_name")
                    .table(Suppliers::Table)
                    .col(Suppliers::Name)
                    .to_owned(),
            )
            .await?;

        // GIN index backs the `products @> ...` containment filter
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_suppliers_products ON suppliers USING GIN (products)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    Name,
    Email,
    Address,
    Products,
    CreatedAt,
    UpdatedAt,
}
