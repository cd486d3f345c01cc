use crate::role::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invitation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ward_id: Uuid,
    pub email: String,
    pub role: Role,
    /// Single-use opaque secret. A v4 UUID: random enough to be unguessable
    /// and shaped so the redirect validator can check it without a lookup.
    #[sea_orm(unique)]
    pub token: Uuid,
    pub expires_at: DateTimeUtc,
    /// Set exactly once, at redemption. A consumed invitation is terminal.
    pub used_at: Option<DateTimeUtc>,
    pub created_by: Uuid,
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
