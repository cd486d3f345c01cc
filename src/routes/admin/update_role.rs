use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RRoleChange;
use crate::utils::webutils::{authenticate_caller, require_role};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::role::Role;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    pub previous_role: String,
    pub new_role: String,
}

#[post("/role")]
async fn update_role(
    db: web::Data<Arc<DbService>>,
    auth: BearerAuth,
    body: web::Json<RRoleChange>,
) -> ApiResult<Response> {
    let caller = authenticate_caller(&db, &auth).await?;
    require_role(&caller, &[Role::Bishopric])?;

    // Own-role changes get their own code, whatever role was requested.
    if body.target_user_id == caller.id {
        error!("role_change rejected: {} tried to change own role", caller.id);
        return Err(AppError::CannotChangeOwnRole);
    }

    let new_role = Role::from_str(&body.new_role).map_err(|_| {
        error!("payload_validation failed: unknown role {:?}", body.new_role);
        AppError::Validation {
            code: "invalid_role",
            message: "role must be bishopric, secretary or observer".to_string(),
        }
    })?;

    let (previous, new) = db
        .change_user_role(caller.ward_id, body.target_user_id, new_role)
        .await?;
    info!(
        "role_change: {} set {} from {} to {}",
        caller.id, body.target_user_id, previous, new
    );

    Ok(ApiResponse::Ok(Response {
        success: true,
        previous_role: previous.to_string(),
        new_role: new.to_string(),
    }))
}
