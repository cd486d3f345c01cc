use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub invite_ttl_days: i64,
    pub mail: MailConfig,
    pub pages: PageConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

/// Externally hosted static pages the redirect handlers point at.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub invite_url: String,
    pub reset_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("DATABASE_URL"),
            invite_ttl_days: env::var("INVITE_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: env::var("MAIL_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                from: env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "noreply@wardplanner.app".to_string()),
            },
            pages: PageConfig {
                invite_url: Self::get_env("INVITE_PAGE_URL"),
                reset_url: Self::get_env("RESET_PAGE_URL"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
