use chrono::{DateTime, Utc};
use entity::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Db-layer payload for account creation during invitation redemption.
#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub ward_id: Uuid,
    pub password_hash: String,
}

/// Public projection of a user row; never carries credential hashes.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserOut {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&entity::user::Model> for UserOut {
    fn from(u: &entity::user::Model) -> Self {
        UserOut {
            id: u.id,
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            role: u.role.to_string(),
            created_at: u.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RRoleChange {
    pub target_user_id: Uuid,
    pub new_role: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RUserDelete {
    pub target_user_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RResetEmail {
    pub email: String,
}
