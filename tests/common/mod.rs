use sea_orm::ConnectOptions;
use std::sync::Arc;
use ward_auth::config::{EnvConfig, MailConfig, PageConfig, CONFIG};
use ward_auth::db::service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Handlers read the global config; first caller wins, the rest reuse.
        CONFIG.set(get_test_config()).ok();

        // A single pooled connection keeps every query on the same in-memory
        // sqlite database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let db = Arc::new(
            DbService::new(options)
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        invite_ttl_days: 30,
        mail: MailConfig {
            api_key: "test".to_string(),
            // Discard port: connection refused immediately, nothing sent.
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from: "noreply@test.invalid".to_string(),
        },
        pages: PageConfig {
            invite_url: "https://pages.test/invite".to_string(),
            reset_url: "https://pages.test/reset".to_string(),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use ward_auth::types::invitation::{RInvitationCreate, RInvitationRegister};
    use uuid::Uuid;

    pub fn sample_invitation(email: &str, role: &str) -> RInvitationCreate {
        RInvitationCreate {
            email: email.to_string(),
            role: role.to_string(),
            diagnose: false,
        }
    }

    pub fn sample_registration(token: Uuid) -> RInvitationRegister {
        RInvitationRegister {
            token,
            password: "correct-horse-battery".to_string(),
            full_name: "Invited Person".to_string(),
        }
    }
}
