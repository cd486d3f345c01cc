use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::config::config;
use crate::types::mail::SendEmail;

pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let api = &config().mail.endpoint;
    let api_key = &config().mail.api_key;

    let payload = serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("ward-auth/0.3 (+reqwest)")
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(api)
        .bearer_auth(api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;

    info!("[mail] <- status: {status} in {} ms", dt.as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}

/// Invitation email in the ward's language, falling back to English.
pub fn invitation_email(
    to: &str,
    language: &str,
    ward_name: &str,
    link: &str,
    ttl_days: i64,
) -> SendEmail {
    let (subject, body) = match language {
        "es" => (
            format!("Invitación al barrio {ward_name}"),
            format!(
                "Ha sido invitado a unirse a la planificación del barrio {ward_name}.\n\
                 Abra este enlace para crear su cuenta: {link}\n\
                 El enlace caduca en {ttl_days} días."
            ),
        ),
        "pt" => (
            format!("Convite para a ala {ward_name}"),
            format!(
                "Você foi convidado a participar do planejamento da ala {ward_name}.\n\
                 Abra este link para criar sua conta: {link}\n\
                 O link expira em {ttl_days} dias."
            ),
        ),
        _ => (
            format!("Invitation to {ward_name}"),
            format!(
                "You have been invited to help plan sacrament meetings for {ward_name}.\n\
                 Open this link to create your account: {link}\n\
                 The link expires in {ttl_days} days."
            ),
        ),
    };
    SendEmail {
        from: config().mail.from.clone(),
        to: vec![to.to_string()],
        subject,
        text: body,
    }
}

/// Password reset email in the ward's language, falling back to English.
pub fn reset_email(to: &str, language: &str, link: &str) -> SendEmail {
    let (subject, body) = match language {
        "es" => (
            "Restablecer contraseña".to_string(),
            format!("Para restablecer su contraseña, abra este enlace: {link}"),
        ),
        "pt" => (
            "Redefinir senha".to_string(),
            format!("Para redefinir sua senha, abra este link: {link}"),
        ),
        _ => (
            "Reset your password".to_string(),
            format!("To reset your password, open this link: {link}"),
        ),
    };
    SendEmail {
        from: config().mail.from.clone(),
        to: vec![to.to_string()],
        subject,
        text: body,
    }
}

/// Fire-and-forget send. Mail must never fail the operation that queued it.
pub async fn send_best_effort(label: &str, email: SendEmail) {
    if let Err(e) = send_email(email).await {
        error!("{label} failed: {e}");
    }
}
