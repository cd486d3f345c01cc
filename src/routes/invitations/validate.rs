use crate::db::service::DbService;
use crate::types::invitation::{InvitationPreview, RInvitationValidate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct Response {
    pub invitation: InvitationPreview,
}

/// Read-only token check so the registration form can pre-fill. No state
/// changes, no authentication: the token itself is the credential.
#[post("/validate")]
async fn validate(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RInvitationValidate>,
) -> ApiResult<Response> {
    let inv = db.validate_invitation(&body.token).await?;
    let ward = db.get_ward(&inv.ward_id).await?;

    Ok(ApiResponse::Ok(Response {
        invitation: InvitationPreview {
            email: inv.email,
            role: inv.role.to_string(),
            ward_name: ward.name,
            stake_name: ward.stake_name,
        },
    }))
}
