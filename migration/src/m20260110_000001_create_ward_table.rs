use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ward::Table)
                    .col(
                        ColumnDef::new(Ward::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Ward::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Ward::StakeName)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Ward::Language)
                            .string()
                            .not_null()
                            .default("en")
                    )
                    .col(
                        ColumnDef::new(Ward::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Ward::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Ward::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ward {
    Table,
    Id,
    Name,
    StakeName,
    Language,
    CreatedAt,
    UpdatedAt,
}
