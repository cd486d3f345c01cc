mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::role::Role;

#[actix_web::test]
async fn test_reset_email_response_is_indistinguishable() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Reset Ward").await;
    let (user, _) = client
        .create_session_user(ward.id, Role::Secretary, Some("known@test.com".to_string()))
        .await;

    let mut bodies = Vec::new();
    for email in ["known@test.com", "nobody@test.com"] {
        let req = test::TestRequest::post()
            .uri("/auth/reset-email")
            .set_json(serde_json::json!({ "email": email }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        bodies.push(body);
    }

    // Same payload for hit and miss.
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0], serde_json::json!({ "success": true }));

    // The hit stored a reset token; the miss had nowhere to store one.
    let reloaded = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert!(reloaded.reset_token.is_some());
    assert!(reloaded.reset_requested_at.is_some());
}

#[actix_web::test]
async fn test_reset_email_unknown_account_stores_nothing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Quiet Ward").await;
    let (user, _) = client
        .create_session_user(ward.id, Role::Observer, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/reset-email")
        .set_json(serde_json::json!({ "email": "someone-else@test.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let reloaded = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert!(reloaded.reset_token.is_none());
}
