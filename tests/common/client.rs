use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;
use ward_auth::{
    db::service::DbService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::encrypt,
};

use entity::role::Role;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(ward_auth::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_ward(&self, name: &str) -> entity::ward::Model {
        self.db
            .create_ward(name.to_string(), "Test Stake".to_string(), "en".to_string())
            .await
            .expect("Failed to create ward")
    }

    /// Seed a user with an active session; returns the row and a bearer token
    /// the handlers will accept.
    #[allow(dead_code)]
    pub async fn create_session_user(
        &self,
        ward_id: Uuid,
        role: Role,
        email: Option<String>,
    ) -> (entity::user::Model, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = encrypt("a-test-password").expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                email,
                full_name: "Test User".to_string(),
                role,
                ward_id,
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let bearer = self
            .db
            .establish_session(&user.id)
            .await
            .expect("Failed to establish session");

        // Re-read so the returned model carries the session hash.
        let user = self
            .db
            .get_user_by_id(&user.id)
            .await
            .expect("Failed to reload user");

        (user, bearer)
    }

    #[allow(dead_code)]
    pub async fn try_create_user(
        &self,
        ward_id: Uuid,
        role: Role,
        email: String,
    ) -> Result<entity::user::Model, AppError> {
        let password_hash = encrypt("a-test-password").expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate {
                email,
                full_name: "Test User".to_string(),
                role,
                ward_id,
                password_hash,
            })
            .await
    }
}
