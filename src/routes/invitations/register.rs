use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::invitation::RInvitationRegister;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserOut;
use crate::utils::token::encrypt;
use actix_web::{post, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Serialize)]
pub struct Response {
    pub user: UserOut,
    /// Bearer token for the fresh account; null when session establishment
    /// failed (the account still exists and can log in later).
    pub session: Option<String>,
}

#[post("/register")]
async fn register(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RInvitationRegister>,
) -> ApiResult<Response> {
    if body.password.len() < 8 {
        error!("payload_validation failed: weak password");
        return Err(AppError::Validation {
            code: "weak_password",
            message: "password must be at least 8 characters".to_string(),
        });
    }
    if body.full_name.trim().is_empty() {
        error!("payload_validation failed: empty full name");
        return Err(AppError::Validation {
            code: "invalid_full_name",
            message: "full name must not be empty".to_string(),
        });
    }

    let password_hash = encrypt(&body.password)
        .map_err(|e| AppError::Internal(format!("password hash failed: {e}")))?;

    // Token state is re-checked inside the redemption transaction; the
    // account exists and the token is consumed, or neither happened.
    let user = db
        .redeem_invitation(&body.token, body.full_name.trim().to_string(), password_hash)
        .await?;
    info!("invitation redeemed, user {} created", user.id);

    // Account creation is the durable side effect; the login convenience is
    // best-effort on top of it.
    let session = match db.establish_session(&user.id).await {
        Ok(token) => Some(token),
        Err(e) => {
            error!("session_establishment failed: {e}");
            None
        }
    };

    Ok(ApiResponse::Created(Response {
        user: UserOut::from(&user),
        session,
    }))
}
