mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

use common::{
    insert_customer, insert_movie, insert_rental, movie_stock, request, send_json,
    setup_test_app, user_token,
};

struct Fixture {
    customer_id: Uuid,
    movie_id: Uuid,
    rental_id: Uuid,
}

async fn rental_fixture(pool: &PgPool, is_gold: bool, days_out: i32) -> Fixture {
    let customer_id = insert_customer(pool, "Jane Customer", is_gold).await;
    let movie_id = insert_movie(pool, "Terminator", 10, 2.0).await;
    let rental_id = insert_rental(pool, customer_id, movie_id, days_out).await;
    Fixture {
        customer_id,
        movie_id,
        rental_id,
    }
}

fn return_body(fixture: &Fixture) -> Value {
    json!({ "customerId": fixture.customer_id, "movieId": fixture.movie_id })
}

async fn post_return(pool: &PgPool, body: Value) -> (StatusCode, Value) {
    let app = setup_test_app(pool.clone());
    let token = user_token();
    send_json(&app, request("POST", "/api/returns", Some(&token), Some(body))).await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_without_token_is_unauthorized(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;
    let app = setup_test_app(pool.clone());

    let (status, _) = send_json(
        &app,
        request("POST", "/api/returns", None, Some(return_body(&fixture))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_with_invalid_token_is_unauthorized(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;
    let app = setup_test_app(pool.clone());

    let (status, _) = send_json(
        &app,
        request(
            "POST",
            "/api/returns",
            Some("not-a-token"),
            Some(return_body(&fixture)),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_missing_customer_id_is_bad_request(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (status, body) = post_return(&pool, json!({ "movieId": fixture.movie_id })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "customerId is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_missing_movie_id_is_bad_request(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (status, body) = post_return(&pool, json!({ "customerId": fixture.customer_id })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "movieId is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_malformed_ids_are_bad_request(pool: PgPool) {
    let (status, _) = post_return(&pool, json!({ "customerId": "1234", "movieId": "5678" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_without_matching_rental_is_not_found(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (status, body) = post_return(
        &pool,
        json!({ "customerId": fixture.customer_id, "movieId": Uuid::new_v4() }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Rental not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_already_returned_is_bad_request_and_unchanged(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (first_status, first) = post_return(&pool, return_body(&fixture)).await;
    assert_eq!(first_status, StatusCode::OK);
    let stock_after_first = movie_stock(&pool, fixture.movie_id).await;

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rental already returned");

    let (date_returned, rental_fee): (Option<DateTime<Utc>>, Option<f64>) =
        sqlx::query_as("SELECT date_returned, rental_fee FROM rentals WHERE id = $1")
            .bind(fixture.rental_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    let first_returned: DateTime<Utc> = first["dateReturned"].as_str().unwrap().parse().unwrap();
    assert_eq!(date_returned, Some(first_returned));
    assert_eq!(rental_fee, first["rentalFee"].as_f64());
    assert_eq!(movie_stock(&pool, fixture.movie_id).await, stock_after_first);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_sets_date_returned_to_now(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    let date_returned: DateTime<Utc> = body["dateReturned"].as_str().unwrap().parse().unwrap();
    assert!((Utc::now() - date_returned) < Duration::seconds(10));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_fee_for_regular_customer(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rentalFee"].as_f64(), Some(14.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_fee_for_gold_customer(pool: PgPool) {
    let fixture = rental_fixture(&pool, true, 7).await;

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rentalFee"].as_f64(), Some(12.6));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_persists_rental(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    post_return(&pool, return_body(&fixture)).await;

    let (date_returned, rental_fee): (Option<DateTime<Utc>>, Option<f64>) =
        sqlx::query_as("SELECT date_returned, rental_fee FROM rentals WHERE id = $1")
            .bind(fixture.rental_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(date_returned.is_some());
    assert_eq!(rental_fee, Some(14.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_increments_stock_by_one(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;
    let before = movie_stock(&pool, fixture.movie_id).await;

    let (status, _) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie_stock(&pool, fixture.movie_id).await, before + 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_response_contains_rental(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;

    let (_, body) = post_return(&pool, return_body(&fixture)).await;

    for key in ["dateOut", "dateReturned", "rentalFee", "customer", "movie"] {
        assert!(body.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(body["id"], fixture.rental_id.to_string());
    assert_eq!(body["customer"]["id"], fixture.customer_id.to_string());
    assert_eq!(body["movie"]["id"], fixture.movie_id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_still_commits_when_movie_was_deleted(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 7).await;
    sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(fixture.movie_id)
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rentalFee"].as_f64(), Some(14.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_return_prefers_open_rental_over_older_returned_one(pool: PgPool) {
    let fixture = rental_fixture(&pool, false, 10).await;
    // Close the first rental, then rent the same movie again.
    post_return(&pool, return_body(&fixture)).await;
    let second_rental = insert_rental(&pool, fixture.customer_id, fixture.movie_id, 3).await;

    let (status, body) = post_return(&pool, return_body(&fixture)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], second_rental.to_string());
    assert_eq!(body["rentalFee"].as_f64(), Some(6.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_returns_of_one_rental_succeed_once(pool: PgPool) {
    let fixture = rental_fixture(&pool, true, 7).await;
    let stock_before = movie_stock(&pool, fixture.movie_id).await;
    let app = setup_test_app(pool.clone());
    let token = user_token();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            let req = request("POST", "/api/returns", Some(&token), Some(return_body(&fixture)));
            tokio::spawn(async move { send_json(&app, req).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let succeeded: Vec<_> = results.iter().filter(|(s, _)| *s == StatusCode::OK).collect();
    assert_eq!(succeeded.len(), 1);
    assert_eq!(succeeded[0].1["rentalFee"].as_f64(), Some(12.6));

    let rejected: Vec<_> = results.iter().filter(|(s, _)| *s != StatusCode::OK).collect();
    assert_eq!(rejected.len(), 7);
    for (status, body) in rejected {
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Rental already returned");
    }

    assert_eq!(movie_stock(&pool, fixture.movie_id).await, stock_before + 1);
}
