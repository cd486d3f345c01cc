use serde::Serialize;

/// Outbound email payload. Bodies are plain text only.
#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}
