mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use uuid::Uuid;

#[actix_web::test]
async fn test_invite_redirect_with_uuid_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/redirect/invite?token={token}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert_eq!(location, format!("https://pages.test/invite?token={token}"));
}

#[actix_web::test]
async fn test_invite_redirect_never_reflects_malformed_tokens() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for bad in [
        "token=not-a-uuid",
        "token=12345",
        "token=%2F%2Fevil.example.org",
        "token=",
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/redirect/invite?{bad}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input: {bad}");
        assert!(resp.headers().get("Location").is_none());
    }
}

#[actix_web::test]
async fn test_reset_redirect_with_valid_token_and_type() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let token = "pkce_0123456789abcdefABCDEF-_";
    for kind in ["recovery", "signup", "email_change"] {
        let req = test::TestRequest::get()
            .uri(&format!("/redirect/reset?token={token}&type={kind}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        let location = resp.headers().get("Location").unwrap().to_str().unwrap();
        assert_eq!(
            location,
            format!("https://pages.test/reset?token={token}&type={kind}")
        );
    }
}

#[actix_web::test]
async fn test_reset_redirect_rejects_bad_shape_or_type() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let cases = [
        // shape failures
        "token=short&type=recovery",
        "token=has%20space%20in%20the%20middle&type=recovery",
        "token=semi;colon0123456789&type=recovery",
        // type failures
        "token=pkce_0123456789abcdef&type=magiclink",
        "token=pkce_0123456789abcdef&type=",
        // missing params fail query extraction
        "token=pkce_0123456789abcdef",
        "type=recovery",
    ];
    for bad in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/redirect/reset?{bad}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input: {bad}");
        assert!(resp.headers().get("Location").is_none());
    }
}
