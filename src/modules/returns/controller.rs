use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{Rental, ReturnRentalDto};

use crate::middleware::auth::AuthUser;
use crate::modules::returns::service::ReturnService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Return a rented movie and compute the rental fee
///
/// The fee is the number of whole days since the rental started times the
/// movie's daily rate, with a 10% discount for gold customers.
#[utoipa::path(
    post,
    path = "/api/returns",
    request_body = ReturnRentalDto,
    responses(
        (status = 200, description = "Rental returned", body = Rental),
        (status = 400, description = "Invalid input or rental already returned", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 404, description = "No rental for this customer and movie", body = vidly_core::ErrorResponse)
    ),
    tag = "Returns",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn return_rental(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ReturnRentalDto>,
) -> Result<Json<Rental>, AppError> {
    let rental = ReturnService::return_rental(&state.db, dto).await?;
    Ok(Json(rental))
}
