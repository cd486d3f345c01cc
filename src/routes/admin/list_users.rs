use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserOut;
use crate::utils::webutils::{authenticate_caller, require_role};
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::role::Role;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct Response {
    pub users: Vec<UserOut>,
}

/// All users of the caller's ward, creation order.
#[get("")]
async fn list_users(db: web::Data<Arc<DbService>>, auth: BearerAuth) -> ApiResult<Response> {
    let caller = authenticate_caller(&db, &auth).await?;
    require_role(&caller, &[Role::Bishopric])?;

    let users = db.list_users_in_ward(caller.ward_id).await?;

    Ok(ApiResponse::Ok(Response {
        users: users.iter().map(UserOut::from).collect(),
    }))
}
