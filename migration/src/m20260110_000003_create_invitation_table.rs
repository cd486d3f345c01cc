use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Invitation::Table)
                .col(ColumnDef::new(Invitation::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Invitation::WardId).uuid().not_null())
                .col(ColumnDef::new(Invitation::Email).string().not_null())
                .col(ColumnDef::new(Invitation::Role).string().not_null())
                .col(ColumnDef::new(Invitation::Token).uuid().not_null().unique_key())
                .col(ColumnDef::new(Invitation::ExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Invitation::UsedAt).timestamp_with_time_zone())
                .col(ColumnDef::new(Invitation::CreatedBy).uuid().not_null())
                .col(ColumnDef::new(Invitation::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Invitation::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invitation_ward")
                        .from_tbl(Invitation::Table)
                        .from_col(Invitation::WardId)
                        .to_tbl(Ward::Table)
                        .to_col(Ward::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Redemption looks invitations up by token; issuance lists by ward.
        m.create_index(
            Index::create()
                .name("idx_invitation_ward_id")
                .table(Invitation::Table)
                .col(Invitation::WardId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Invitation::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Invitation {
    Table,
    Id,
    WardId,
    Email,
    Role,
    Token,
    ExpiresAt,
    UsedAt,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Ward {
    Table,
    Id,
}
