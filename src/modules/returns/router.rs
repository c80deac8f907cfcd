use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::return_rental;

pub fn init_returns_router() -> Router<AppState> {
    Router::new().route("/", post(return_rental))
}
