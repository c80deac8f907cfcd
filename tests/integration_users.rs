mod common;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;

use common::{
    TOKEN_HEADER, generate_unique_email, insert_user, request, send, send_json, setup_test_app,
    test_jwt_config, user_token,
};
use vidly::vidly_auth::{create_auth_token, verify_token};

#[sqlx::test(migrations = "./migrations")]
async fn test_register_returns_user_and_token_header(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let response = send(
        &app,
        request(
            "POST",
            "/api/users",
            None,
            Some(json!({ "name": "Jane Doe", "email": email, "password": "12345" })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let token = response
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["email"], email);
    assert_eq!(body["isAdmin"], false);
    assert!(body.get("password").is_none());

    let claims = verify_token(&token, &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, body["id"].as_str().unwrap());
    assert!(!claims.is_admin);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_stores_hashed_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    send(
        &app,
        request(
            "POST",
            "/api/users",
            None,
            Some(json!({ "name": "Jane Doe", "email": email, "password": "12345" })),
        ),
    )
    .await;

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "12345");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_is_bad_request(pool: PgPool) {
    let email = generate_unique_email();
    insert_user(&pool, &email, "12345", false).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/users",
            None,
            Some(json!({ "name": "Jane Doe", "email": email, "password": "12345" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already registered.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_invalid_email_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/users",
            None,
            Some(json!({ "name": "Jane Doe", "email": "not-an-email", "password": "12345" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email must be a valid email");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    let email = generate_unique_email();
    let user_id = insert_user(&pool, &email, "12345", true).await;
    let token = create_auth_token(user_id, true, &test_jwt_config()).unwrap();
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(&app, request("GET", "/api/users/me", Some(&token), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["email"], email);
    assert_eq!(body["isAdmin"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_for_deleted_user_is_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, _) =
        send_json(&app, request("GET", "/api/users/me", Some(&user_token()), None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(&app, request("GET", "/api/users/me", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access denied. No token provided.");
}
