use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_rental, get_rental, get_rentals};

pub fn init_rentals_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_rentals).post(create_rental))
        .route("/{id}", get(get_rental))
}
