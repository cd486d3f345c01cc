use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Invitation tokens are v4 UUIDs: 122 random bits, and UUID-shaped so the
/// redirect handler can reject garbage without a database round trip.
pub fn new_invite_token() -> Uuid {
    Uuid::new_v4()
}

/// Random URL-safe secret for sessions and password-reset links.
pub fn new_secret() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

/// Bearer token carried by clients: `base64(user_id.secret)`.
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    let id = Uuid::parse_str(id).ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((id, secret.to_string()))
}

pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}
