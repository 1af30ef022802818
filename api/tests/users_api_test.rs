//! End-to-end tests of the user routes against the in-memory repository

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};
use ud_api::middleware::auth::AUTH_TOKEN_HEADER;
use ud_api::{create_app, AppState};
use ud_core::domain::entities::user::User;
use ud_core::repositories::MockUserRepository;
use ud_core::services::token::TokenService;
use ud_shared::config::{AppConfig, JwtConfig};

struct TestContext {
    state: web::Data<AppState<MockUserRepository>>,
    repo: MockUserRepository,
    tokens: Arc<TokenService>,
}

fn setup(users: Vec<User>) -> TestContext {
    let repo = MockUserRepository::with_users(users);
    let tokens = Arc::new(TokenService::new(&JwtConfig::new("test-secret")).unwrap());
    let state = web::Data::new(AppState::new(Arc::new(repo.clone()), Arc::clone(&tokens)));
    TestContext { state, repo, tokens }
}

fn stored_user(email: &str) -> User {
    User::new("Grace".to_string(), "Hopper".to_string(), email.to_string())
}

fn caller_token(ctx: &TestContext) -> String {
    ctx.tokens.issue(&stored_user("caller@example.com")).unwrap()
}

#[actix_web::test]
async fn test_register_user_success() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User add Success.");
    assert_eq!(body["data"]["firstName"], "Ada");
    assert_eq!(body["data"]["email"], "ada@example.com");

    let token = body["data"]["token"].as_str().unwrap();
    let claims = ctx.tokens.verify(token).unwrap();
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(body["data"]["id"], claims.id);
    assert_eq!(ctx.repo.len().await, 1);
}

#[actix_web::test]
async fn test_register_duplicate_email_rejected() {
    let ctx = setup(vec![stored_user("ada@example.com")]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation Error.");
    assert_eq!(body["data"][0]["field"], "email");
    assert_eq!(body["data"][0]["message"], "E-mail already in use");
    assert_eq!(ctx.repo.len().await, 1);
}

#[actix_web::test]
async fn test_register_non_alphanumeric_names_rejected() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "Ada", "lastName": "<b>Lovelace</b>", "email": "ada@example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["field"], "lastName");
    assert_eq!(body["data"][0]["message"], "Last name has non-alphanumeric characters.");
    assert!(ctx.repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_empty_body_reports_all_fields() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post().uri("/users").set_json(json!({})).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let fields: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "lastName", "email"]);
    assert!(ctx.repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_null_and_numeric_fields_are_validated() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": null, "lastName": 123, "email": "a@b.co" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation Error.");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["field"], "firstName");
    assert_eq!(body["data"][0]["message"], "First name must be specified.");
    assert!(ctx.repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_overlong_name_is_field_error() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "a".repeat(300), "lastName": "Lovelace", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"][0]["field"], "firstName");
    assert_eq!(body["data"][0]["message"], "First name must be at most 255 characters.");
    assert!(ctx.repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_malformed_json() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"firstName\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_register_store_failure_is_500() {
    let ctx = setup(vec![]);
    ctx.repo.set_unavailable(true);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "An internal error occurred" }));
}

#[actix_web::test]
async fn test_list_users_requires_token() {
    let ctx = setup(vec![stored_user("grace@example.com")]);
    // The handler would fail with 500 if it ran
    ctx.repo.set_unavailable(true);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "No token" }));
}

#[actix_web::test]
async fn test_list_users_with_forged_token_is_500() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let forged = TokenService::new(&JwtConfig::new("not-the-secret"))
        .unwrap()
        .issue(&stored_user("mallory@example.com"))
        .unwrap();
    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((AUTH_TOKEN_HEADER, forged))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_list_users_empty() {
    let ctx = setup(vec![]);
    let token = caller_token(&ctx);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((AUTH_TOKEN_HEADER, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "success": true, "message": "Operation success", "data": [] }));
}

#[actix_web::test]
async fn test_list_users_returns_views() {
    let grace = stored_user("grace@example.com");
    let ctx = setup(vec![grace.clone()]);
    let token = caller_token(&ctx);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((AUTH_TOKEN_HEADER, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["data"],
        json!([{
            "id": grace.id.to_string(),
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "status": true,
        }])
    );
}

#[actix_web::test]
async fn test_get_user_found_is_stable() {
    let grace = stored_user("grace@example.com");
    let ctx = setup(vec![grace.clone()]);
    let token = caller_token(&ctx);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", grace.id))
            .insert_header((AUTH_TOKEN_HEADER, token.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0]["data"]["email"], "grace@example.com");
    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn test_get_user_malformed_id_returns_empty_object() {
    let ctx = setup(vec![stored_user("grace@example.com")]);
    let token = caller_token(&ctx);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/users/not-an-id")
        .insert_header((AUTH_TOKEN_HEADER, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "message": "Operation success", "data": {} }));
}

#[actix_web::test]
async fn test_get_user_unknown_id_returns_empty_object() {
    let ctx = setup(vec![]);
    let token = caller_token(&ctx);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", uuid::Uuid::new_v4()))
        .insert_header((AUTH_TOKEN_HEADER, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({}));
}

#[actix_web::test]
async fn test_registration_token_opens_protected_routes() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let token = created["data"]["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", id))
        .insert_header((AUTH_TOKEN_HEADER, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["status"], true);
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_health_degraded_when_store_unreachable() {
    let ctx = setup(vec![]);
    ctx.repo.set_unavailable(true);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
}

#[actix_web::test]
async fn test_unknown_route_is_404_envelope() {
    let ctx = setup(vec![]);
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::default())).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
