use crate::config::config;
use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::invitation::{DiagnosticStep, InvitationOut, RInvitationCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::{invitation_email, send_best_effort};
use crate::utils::webutils::{authenticate_caller, is_valid_email, require_role};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::role::Role;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Serialize)]
#[serde(untagged)]
pub enum Response {
    Created { invitation: InvitationOut },
    Diagnostics { diagnostics: Vec<DiagnosticStep> },
}

fn step(name: &str, ok: bool, detail: Option<String>) -> DiagnosticStep {
    DiagnosticStep {
        step: name.to_string(),
        ok,
        detail,
    }
}

/// Issue a single-use invitation for the caller's ward. Re-issuing to an
/// email with a live invitation mints a second valid token on purpose.
#[post("")]
async fn create(
    db: web::Data<Arc<DbService>>,
    auth: BearerAuth,
    body: web::Json<RInvitationCreate>,
) -> ApiResult<Response> {
    if body.diagnose {
        return diagnose(&db, &auth, &body).await;
    }

    let caller = authenticate_caller(&db, &auth).await?;
    require_role(&caller, &[Role::Bishopric, Role::Secretary])?;

    if !is_valid_email(&body.email) {
        error!("payload_validation failed: bad email shape");
        return Err(AppError::Validation {
            code: "invalid_email",
            message: "email is not a valid address".to_string(),
        });
    }
    let role = Role::from_str(&body.role).map_err(|_| {
        error!("payload_validation failed: unknown role {:?}", body.role);
        AppError::Validation {
            code: "invalid_role",
            message: "role must be bishopric, secretary or observer".to_string(),
        }
    })?;

    let ward = db.get_ward(&caller.ward_id).await?;

    let inv = db
        .create_invitation(
            caller.ward_id,
            body.email.clone(),
            role,
            caller.id,
            config().invite_ttl_days,
        )
        .await?;
    info!("invitation {} created for ward {}", inv.id, ward.id);

    // Bishopric invitees get an agenda-actor profile up front. Failure here
    // must not fail the invitation.
    if role == Role::Bishopric {
        if let Err(e) = db.upsert_member(caller.ward_id, &body.email, &body.email).await {
            error!("member_provisioning failed: {e}");
        }
    }

    let deep_link = format!("{}?token={}", config().pages.invite_url, inv.token);
    send_best_effort(
        "invitation_mail",
        invitation_email(
            &body.email,
            &ward.language,
            &ward.name,
            &deep_link,
            config().invite_ttl_days,
        ),
    )
    .await;

    Ok(ApiResponse::Created(Response::Created {
        invitation: InvitationOut {
            id: inv.id,
            email: inv.email,
            role: inv.role.to_string(),
            token: inv.token,
            deep_link,
            expires_at: inv.expires_at,
        },
    }))
}

/// Dry run: every validation step reported, nothing inserted.
async fn diagnose(
    db: &DbService,
    auth: &BearerAuth,
    body: &RInvitationCreate,
) -> ApiResult<Response> {
    let mut steps = Vec::new();

    let caller = match authenticate_caller(db, auth).await {
        Ok(c) => {
            steps.push(step("caller_authenticated", true, None));
            Some(c)
        }
        Err(_) => {
            steps.push(step(
                "caller_authenticated",
                false,
                Some("bearer token did not resolve to a user".to_string()),
            ));
            None
        }
    };

    if let Some(caller) = &caller {
        let authorized = require_role(caller, &[Role::Bishopric, Role::Secretary]).is_ok();
        steps.push(step(
            "caller_authorized",
            authorized,
            (!authorized).then(|| format!("role {} may not issue invitations", caller.role)),
        ));
        let ward_ok = db.get_ward(&caller.ward_id).await.is_ok();
        steps.push(step(
            "ward_lookup",
            ward_ok,
            (!ward_ok).then(|| "caller's ward does not exist".to_string()),
        ));
    }

    let email_ok = is_valid_email(&body.email);
    steps.push(step(
        "email_shape",
        email_ok,
        (!email_ok).then(|| "email is not a valid address".to_string()),
    ));

    let role_ok = Role::from_str(&body.role).is_ok();
    steps.push(step(
        "role_value",
        role_ok,
        (!role_ok).then(|| format!("unknown role {:?}", body.role)),
    ));

    Ok(ApiResponse::Ok(Response::Diagnostics { diagnostics: steps }))
}
