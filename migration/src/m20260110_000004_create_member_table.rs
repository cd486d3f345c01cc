use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Member::Table)
                .col(ColumnDef::new(Member::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Member::WardId).uuid().not_null())
                .col(ColumnDef::new(Member::Email).string().not_null())
                .col(ColumnDef::new(Member::FullName).string().not_null())
                .col(ColumnDef::new(Member::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Member::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_member_ward")
                        .from_tbl(Member::Table)
                        .from_col(Member::WardId)
                        .to_tbl(Ward::Table)
                        .to_col(Ward::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // One profile per address per ward; re-invites update in place.
        m.create_index(
            Index::create()
                .name("idx_member_ward_email")
                .table(Member::Table)
                .col(Member::WardId)
                .col(Member::Email)
                .unique()
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Member::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Member {
    Table,
    Id,
    WardId,
    Email,
    FullName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Ward {
    Table,
    Id,
}
