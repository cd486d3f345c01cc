use crate::config::config;
use crate::types::error::AppError;
use actix_web::{get, http::header::LOCATION, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

const RESET_TYPES: &[&str] = &["recovery", "signup", "email_change"];

#[derive(Deserialize)]
pub struct InviteQuery {
    token: String,
}

#[derive(Deserialize)]
pub struct ResetQuery {
    token: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Only characters that can appear in a URL-safe token hash. Anything else
/// never reaches the Location header.
fn is_reset_token_shaped(token: &str) -> bool {
    (16..=128).contains(&token.len())
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// 302 to the hosted invite page. The token must already look like an
/// invitation token (UUID) before any redirect is constructed.
#[get("/invite")]
async fn invite_redirect(query: web::Query<InviteQuery>) -> Result<HttpResponse, AppError> {
    let token = Uuid::parse_str(&query.token).map_err(|_| {
        error!("invite_redirect rejected: token failed UUID parse");
        AppError::Validation {
            code: "invalid_token_format",
            message: "token is not a valid invitation token".to_string(),
        }
    })?;

    let location = format!("{}?token={}", config().pages.invite_url, token);
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish())
}

/// 302 to the hosted reset page. Token shape and type allow-list are both
/// checked first; this is the open-redirect mitigation, not authentication.
#[get("/reset")]
async fn reset_redirect(query: web::Query<ResetQuery>) -> Result<HttpResponse, AppError> {
    if !is_reset_token_shaped(&query.token) {
        error!("reset_redirect rejected: token failed shape check");
        return Err(AppError::Validation {
            code: "invalid_token_format",
            message: "token is not a valid reset token".to_string(),
        });
    }
    if !RESET_TYPES.contains(&query.kind.as_str()) {
        error!("reset_redirect rejected: unknown type {:?}", query.kind);
        return Err(AppError::Validation {
            code: "invalid_type",
            message: "type must be recovery, signup or email_change".to_string(),
        });
    }

    let location = format!(
        "{}?token={}&type={}",
        config().pages.reset_url,
        query.token,
        query.kind
    );
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish())
}
