use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ward member profile the scheduling side assigns to agenda items
/// (speakers, prayers, conducting). Auto-provisioned for bishopric invitees.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ward_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ward::Entity",
        from = "Column::WardId",
        to   = "super::ward::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ward,
}

impl ActiveModelBehavior for ActiveModel {}
