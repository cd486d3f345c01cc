use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(User::Table)
                .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(User::Email).string().not_null().unique_key())
                .col(ColumnDef::new(User::FullName).string().not_null())
                .col(ColumnDef::new(User::Role).string().not_null())
                .col(ColumnDef::new(User::WardId).uuid().not_null())
                .col(ColumnDef::new(User::PasswordHash).string().not_null())
                .col(ColumnDef::new(User::SessionHash).string())
                .col(ColumnDef::new(User::ResetToken).string())
                .col(ColumnDef::new(User::ResetRequestedAt).timestamp_with_time_zone())
                .col(ColumnDef::new(User::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(User::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_ward")
                        .from_tbl(User::Table)
                        .from_col(User::WardId)
                        .to_tbl(Ward::Table)
                        .to_col(Ward::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_user_ward_id")
                .table(User::Table)
                .col(User::WardId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(User::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Email,
    FullName,
    Role,
    WardId,
    PasswordHash,
    SessionHash,
    ResetToken,
    ResetRequestedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Ward {
    Table,
    Id,
}
