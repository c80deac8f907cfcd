mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use common::{
    admin_token, insert_customer, request, send_json, setup_test_app, user_token,
};

#[sqlx::test(migrations = "./migrations")]
async fn test_create_customer_defaults_to_not_gold(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/customers",
            Some(&user_token()),
            Some(json!({ "name": "Jane Doe", "phone": "555-0100" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["isGold"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_customer_validates_phone(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "POST",
            "/api/customers",
            Some(&user_token()),
            Some(json!({ "name": "Jane Doe", "phone": "55" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "phone must be between 5 and 50 characters");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_customer_to_gold(pool: PgPool) {
    let id = insert_customer(&pool, "Jane Doe", false).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "PUT",
            &format!("/api/customers/{id}"),
            Some(&user_token()),
            Some(json!({ "name": "Jane Doe", "phone": "555-0100", "isGold": true })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isGold"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_customers_and_by_id(pool: PgPool) {
    let id = insert_customer(&pool, "Jane Doe", true).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(&app, request("GET", "/api/customers", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) =
        send_json(&app, request("GET", &format!("/api/customers/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isGold"], true);

    let (status, _) = send_json(
        &app,
        request("GET", &format!("/api/customers/{}", Uuid::new_v4()), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_customer_as_admin(pool: PgPool) {
    let id = insert_customer(&pool, "Jane Doe", false).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request("DELETE", &format!("/api/customers/{id}"), Some(&admin_token()), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_unknown_customer_is_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = send_json(
        &app,
        request(
            "PUT",
            &format!("/api/customers/{}", Uuid::new_v4()),
            Some(&user_token()),
            Some(json!({ "name": "Jane Doe", "phone": "555-0100" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_update_customer_require_token(pool: PgPool) {
    let id = insert_customer(&pool, "Jane Doe", false).await;
    let app = setup_test_app(pool.clone());
    let body = json!({ "name": "Jane Doe", "phone": "555-0100" });

    let (status, _) =
        send_json(&app, request("POST", "/api/customers", None, Some(body.clone()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let uri = format!("/api/customers/{id}");
    let (status, _) = send_json(&app, request("PUT", &uri, None, Some(body))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_customer_as_non_admin_is_forbidden(pool: PgPool) {
    let id = insert_customer(&pool, "Jane Doe", false).await;
    let app = setup_test_app(pool.clone());
    let uri = format!("/api/customers/{id}");

    let (status, _) = send_json(&app, request("DELETE", &uri, Some(&user_token()), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send_json(&app, request("GET", &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
}
