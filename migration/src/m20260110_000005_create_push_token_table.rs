use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(PushToken::Table)
                .col(ColumnDef::new(PushToken::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(PushToken::UserId).uuid().not_null())
                .col(ColumnDef::new(PushToken::Token).string().not_null())
                .col(ColumnDef::new(PushToken::Platform).string().not_null())
                .col(ColumnDef::new(PushToken::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_push_token_user")
                        .from_tbl(PushToken::Table)
                        .from_col(PushToken::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_push_token_user_id")
                .table(PushToken::Table)
                .col(PushToken::UserId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PushToken::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum PushToken {
    Table,
    Id,
    UserId,
    Token,
    Platform,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
