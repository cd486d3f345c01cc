use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserDelete;
use crate::utils::webutils::{authenticate_caller, require_role};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::role::Role;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    pub deleted_user_id: Uuid,
}

#[post("/delete")]
async fn delete_user(
    db: web::Data<Arc<DbService>>,
    auth: BearerAuth,
    body: web::Json<RUserDelete>,
) -> ApiResult<Response> {
    let caller = authenticate_caller(&db, &auth).await?;
    require_role(&caller, &[Role::Bishopric])?;

    if body.target_user_id == caller.id {
        error!("user_delete rejected: {} tried to delete self", caller.id);
        return Err(AppError::CannotDeleteSelf);
    }

    let deleted = db.delete_user(caller.ward_id, body.target_user_id).await?;
    info!("user_delete: {} removed {}", caller.id, deleted);

    Ok(ApiResponse::Ok(Response {
        success: true,
        deleted_user_id: deleted,
    }))
}
