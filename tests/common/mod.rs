#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use vidly::router::init_router;
use vidly::state::AppState;
use vidly::vidly_auth::create_auth_token;
use vidly::vidly_config::{CorsConfig, JwtConfig, RateLimitConfig};
use vidly::vidly_core::hash_password;

pub const TOKEN_HEADER: &str = "x-auth-token";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        expiry: 3600,
    }
}

pub fn test_state(pool: PgPool, rate_limit_config: RateLimitConfig) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        rate_limit_config,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool, RateLimitConfig::disabled()))
}

pub fn user_token() -> String {
    create_auth_token(Uuid::new_v4(), false, &test_jwt_config()).unwrap()
}

pub fn admin_token() -> String {
    create_auth_token(Uuid::new_v4(), true, &test_jwt_config()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("user_{}@example.com", Uuid::new_v4().simple())
}

/// Builds a request with an optional JSON body and token.
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Same as [`request`], tagged with a peer address for the rate limiter.
pub fn request_from(
    addr: SocketAddr,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> Request<Body> {
    let mut req = request(method, uri, None, body);
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

pub async fn send(app: &axum::Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

/// Sends a request and returns the status with the parsed JSON body
/// (`Value::Null` when the body is empty).
pub async fn send_json(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, req).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn insert_genre(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO genres (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_movie(pool: &PgPool, title: &str, number_in_stock: i32, rate: f64) -> Uuid {
    let genre_id = insert_genre(pool, "Action").await;
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO movies (title, genre_id, genre_name, number_in_stock, daily_rental_rate)
           VALUES ($1, $2, 'Action', $3, $4)
           RETURNING id"#,
    )
    .bind(title)
    .bind(genre_id)
    .bind(number_in_stock)
    .bind(rate)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_customer(pool: &PgPool, name: &str, is_gold: bool) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO customers (name, phone, is_gold) VALUES ($1, '12345', $2) RETURNING id",
    )
    .bind(name)
    .bind(is_gold)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts an open rental whose `date_out` is `days_out` days in the past.
pub async fn insert_rental(
    pool: &PgPool,
    customer_id: Uuid,
    movie_id: Uuid,
    days_out: i32,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO rentals (
               customer_id, customer_name, customer_phone, customer_is_gold,
               movie_id, movie_title, movie_daily_rental_rate, date_out
           )
           SELECT c.id, c.name, c.phone, c.is_gold, m.id, m.title, m.daily_rental_rate,
                  NOW() - make_interval(days => $3)
           FROM customers c, movies m
           WHERE c.id = $1 AND m.id = $2
           RETURNING id"#,
    )
    .bind(customer_id)
    .bind(movie_id)
    .bind(days_out)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn movie_stock(pool: &PgPool, movie_id: Uuid) -> i32 {
    sqlx::query_scalar::<_, i32>("SELECT number_in_stock FROM movies WHERE id = $1")
        .bind(movie_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_user(pool: &PgPool, email: &str, password: &str, is_admin: bool) -> Uuid {
    let hashed = hash_password(password).unwrap();
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, is_admin) VALUES ('Test User', $1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(hashed)
    .bind(is_admin)
    .fetch_one(pool)
    .await
    .unwrap()
}
