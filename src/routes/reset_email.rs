use crate::config::config;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RResetEmail;
use crate::utils::mail::{reset_email, send_best_effort};
use crate::utils::token::new_secret;
use actix_web::{post, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

#[derive(Serialize)]
pub struct Response {
    pub success: bool,
}

/// Password-reset dispatch. The response is identical whether or not the
/// address matches an account, so this endpoint cannot be used to probe for
/// registered emails.
#[post("/reset-email")]
async fn send_reset_email(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RResetEmail>,
) -> ApiResult<Response> {
    match db.find_user_by_email(&body.email).await {
        Ok(Some(user)) => {
            let token = new_secret();
            if let Err(e) = db.set_reset_token(&user.id, token.clone()).await {
                error!("reset_token_store failed: {e}");
            } else {
                let language = match db.get_ward(&user.ward_id).await {
                    Ok(ward) => ward.language,
                    Err(_) => "en".to_string(),
                };
                let link = format!("{}?token={}&type=recovery", config().pages.reset_url, token);
                send_best_effort("reset_mail", reset_email(&user.email, &language, &link)).await;
            }
        }
        Ok(None) => {}
        Err(e) => {
            // Even lookup failures stay invisible to the caller.
            error!("reset_lookup failed: {e}");
        }
    }

    Ok(ApiResponse::Ok(Response { success: true }))
}
