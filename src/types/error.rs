use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("validation error: {message}")]
    Validation {
        code: &'static str,
        message: String,
    },
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("email already in use")]
    EmailInUse,

    // invitation token lifecycle
    #[error("token invalid")]
    TokenInvalid,
    #[error("token used")]
    TokenUsed,
    #[error("token expired")]
    TokenExpired,

    // business rules that deserve their own client message
    #[error("cannot change own role")]
    CannotChangeOwnRole,
    #[error("cannot delete self")]
    CannotDeleteSelf,
    #[error("cannot demote last bishopric member")]
    CannotDemoteLastBishopric,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => *code,
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "insufficient_permissions",
            Self::NotFound => "not_found",
            Self::EmailInUse => "email_in_use",
            Self::TokenInvalid => "token_invalid",
            Self::TokenUsed => "token_used",
            Self::TokenExpired => "token_expired",
            Self::CannotChangeOwnRole => "cannot_change_own_role",
            Self::CannotDeleteSelf => "cannot_delete_self",
            Self::CannotDemoteLastBishopric => "cannot_demote_last_bishopric",
            Self::Db(_) | Self::Internal(_) => "internal_error",
        }
    }

    /// Client-facing message. Generic for auth and infra failures, specific
    /// for validation and business-rule denials.
    fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Unauthorized => "Authentication required".to_string(),
            Self::Forbidden => "Insufficient permissions".to_string(),
            Self::Db(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden
            | Self::CannotChangeOwnRole
            | Self::CannotDeleteSelf
            | Self::CannotDemoteLastBishopric => StatusCode::FORBIDDEN,
            Self::NotFound | Self::TokenInvalid => StatusCode::NOT_FOUND,
            Self::EmailInUse => StatusCode::CONFLICT,
            Self::TokenUsed | Self::TokenExpired => StatusCode::GONE,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &self.client_message(),
        })
    }
}
