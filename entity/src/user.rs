use crate::role::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub ward_id: Uuid, // FK -> ward.id
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Argon2 hash of the current session secret; None until first login.
    #[serde(skip_serializing)]
    pub session_hash: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub reset_requested_at: Option<DateTimeUtc>,
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
