mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::role::Role;
use uuid::Uuid;
use ward_auth::types::error::AppError;

#[actix_web::test]
async fn test_list_users_is_ward_scoped_and_creation_ordered() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Listing Ward").await;
    let other_ward = client.create_ward("Other Ward").await;

    let (bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (secretary, _) = client
        .create_session_user(ward.id, Role::Secretary, None)
        .await;
    let (observer, _) = client
        .create_session_user(ward.id, Role::Observer, None)
        .await;
    // Noise in another ward must never show up.
    client
        .create_session_user(other_ward.id, Role::Bishopric, None)
        .await;

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    let ids: Vec<Uuid> = users
        .iter()
        .map(|u| u["id"].as_str().unwrap().parse().unwrap())
        .collect();
    // Creation order, oldest first.
    assert_eq!(ids, vec![bishop.id, secretary.id, observer.id]);
}

#[actix_web::test]
async fn test_list_users_requires_bishopric() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Locked Ward").await;
    for role in [Role::Secretary, Role::Observer] {
        let (_user, token) = client.create_session_user(ward.id, role, None).await;
        let req = test::TestRequest::get()
            .uri("/admin/users")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn test_role_change_happy_path() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Role Ward").await;
    let (_bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (observer, _) = client
        .create_session_user(ward.id, Role::Observer, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/admin/users/role")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .set_json(serde_json::json!({
            "targetUserId": observer.id,
            "newRole": "secretary",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["previousRole"], "observer");
    assert_eq!(body["newRole"], "secretary");

    let updated = ctx.db.get_user_by_id(&observer.id).await.unwrap();
    assert_eq!(updated.role, Role::Secretary);
}

#[actix_web::test]
async fn test_role_change_rejects_own_role_whatever_is_requested() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Self Ward").await;
    let (bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    // A second bishopric account, so the last-admin rule is not what fires.
    client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;

    for requested in ["bishopric", "secretary", "observer"] {
        let req = test::TestRequest::post()
            .uri("/admin/users/role")
            .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
            .set_json(serde_json::json!({
                "targetUserId": bishop.id,
                "newRole": requested,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "cannot_change_own_role");
    }
}

#[actix_web::test]
async fn test_role_change_protects_last_bishopric() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Last Admin Ward").await;
    let (_first, first_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (second, _) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;

    // Two bishopric accounts: demoting one is fine.
    let req = test::TestRequest::post()
        .uri("/admin/users/role")
        .insert_header(("Authorization", format!("Bearer {}", first_token)))
        .set_json(serde_json::json!({
            "targetUserId": second.id,
            "newRole": "observer",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.db.count_bishopric_in_ward(ward.id).await.unwrap(), 1);

    // Demoting the sole remaining bishopric account must fail at the store,
    // whichever path asks for it.
    let first = ctx.db.list_users_in_ward(ward.id).await.unwrap()[0].clone();
    assert_eq!(first.role, Role::Bishopric);
    let err = ctx
        .db
        .change_user_role(ward.id, first.id, Role::Secretary)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CannotDemoteLastBishopric));

    // Promotions and same-role writes for the last bishopric are unaffected.
    let (prev, new) = ctx
        .db
        .change_user_role(ward.id, first.id, Role::Bishopric)
        .await
        .unwrap();
    assert_eq!(prev, Role::Bishopric);
    assert_eq!(new, Role::Bishopric);
}

#[actix_web::test]
async fn test_role_change_cross_ward_target_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Here Ward").await;
    let there = client.create_ward("There Ward").await;
    let (_bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (foreign, _) = client
        .create_session_user(there.id, Role::Observer, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/admin/users/role")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .set_json(serde_json::json!({
            "targetUserId": foreign.id,
            "newRole": "secretary",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Untouched.
    let foreign_after = ctx.db.get_user_by_id(&foreign.id).await.unwrap();
    assert_eq!(foreign_after.role, Role::Observer);
}

#[actix_web::test]
async fn test_delete_user_rejects_self() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Self Delete Ward").await;
    let (bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/admin/users/delete")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .set_json(serde_json::json!({ "targetUserId": bishop.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "cannot_delete_self");

    assert!(ctx.db.get_user_by_id(&bishop.id).await.is_ok());
}

#[actix_web::test]
async fn test_delete_user_cascades_push_tokens() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Cleanup Ward").await;
    let (_bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (victim, _) = client
        .create_session_user(ward.id, Role::Observer, None)
        .await;

    ctx.db
        .register_push_token(victim.id, "ExponentPushToken[abc]".to_string(), "ios".to_string())
        .await
        .unwrap();
    ctx.db
        .register_push_token(victim.id, "ExponentPushToken[def]".to_string(), "android".to_string())
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/admin/users/delete")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .set_json(serde_json::json!({ "targetUserId": victim.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deletedUserId"], victim.id.to_string());

    assert!(ctx.db.get_user_by_id(&victim.id).await.is_err());
    assert!(ctx
        .db
        .list_push_tokens_for_user(victim.id)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn test_delete_user_cross_ward_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Near Ward").await;
    let far = client.create_ward("Far Ward").await;
    let (_bishop, bishop_token) = client
        .create_session_user(ward.id, Role::Bishopric, None)
        .await;
    let (foreign, _) = client
        .create_session_user(far.id, Role::Observer, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/admin/users/delete")
        .insert_header(("Authorization", format!("Bearer {}", bishop_token)))
        .set_json(serde_json::json!({ "targetUserId": foreign.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(ctx.db.get_user_by_id(&foreign.id).await.is_ok());
}

#[actix_web::test]
async fn test_admin_surface_requires_bishopric() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let ward = client.create_ward("Gate Ward").await;
    let (_secretary, secretary_token) = client
        .create_session_user(ward.id, Role::Secretary, None)
        .await;
    let (observer, _) = client
        .create_session_user(ward.id, Role::Observer, None)
        .await;

    let req = test::TestRequest::post()
        .uri("/admin/users/role")
        .insert_header(("Authorization", format!("Bearer {}", secretary_token)))
        .set_json(serde_json::json!({
            "targetUserId": observer.id,
            "newRole": "secretary",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/admin/users/delete")
        .insert_header(("Authorization", format!("Bearer {}", secretary_token)))
        .set_json(serde_json::json!({ "targetUserId": observer.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
