use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::warn;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};
use entity::role::Role;

/// Resolve a bearer credential to a user row, or 401. Never says why.
pub async fn authenticate_caller(
    db: &DbService,
    auth: &BearerAuth,
) -> Result<entity::user::Model, AppError> {
    let (user_id, secret) = match extract_token_parts(auth.token()) {
        Some(parts) => parts,
        None => {
            warn!("authenticate_caller failed: malformed bearer token");
            return Err(AppError::Unauthorized);
        }
    };

    let user = db
        .get_user_by_id(&user_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let session_hash = user.session_hash.as_deref().ok_or(AppError::Unauthorized)?;
    match verify(&secret, session_hash) {
        Ok(true) => Ok(user),
        _ => {
            warn!("authenticate_caller failed: secret mismatch for {}", user_id);
            Err(AppError::Unauthorized)
        }
    }
}

/// Authorization failure is distinct from authentication failure: the caller
/// is known, they just hold the wrong role.
pub fn require_role(user: &entity::user::Model, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        warn!(
            "role_check failed: user {} has role {} (needs one of {:?})",
            user.id, user.role, allowed
        );
        Err(AppError::Forbidden)
    }
}

/// RFC-shaped, not RFC-complete: one '@', non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("secretary@ward.example.org"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@no-dot"));
        assert!(!is_valid_email("spaced user@ward.org"));
    }
}
