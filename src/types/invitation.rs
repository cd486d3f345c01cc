use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for invitation issuance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RInvitationCreate {
    pub email: String,
    pub role: String,
    /// Run every validation step and report per-step results without
    /// inserting anything. Production debugging aid.
    #[serde(default)]
    pub diagnose: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvitationOut {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub token: Uuid,
    pub deep_link: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DiagnosticStep {
    pub step: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RInvitationValidate {
    pub token: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvitationPreview {
    pub email: String,
    pub role: String,
    pub ward_name: String,
    pub stake_name: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RInvitationRegister {
    pub token: Uuid,
    pub password: String,
    pub full_name: String,
}
