use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{CreateRentalDto, Rental};

use crate::middleware::auth::AuthUser;
use crate::middleware::object_id::ValidId;
use crate::modules::rentals::service::RentalService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/rentals",
    responses(
        (status = 200, description = "All rentals, newest first", body = Vec<Rental>)
    ),
    tag = "Rentals"
)]
#[instrument(skip(state))]
pub async fn get_rentals(State(state): State<AppState>) -> Result<Json<Vec<Rental>>, AppError> {
    let rentals = RentalService::get_rentals(&state.db).await?;
    Ok(Json(rentals))
}

#[utoipa::path(
    get,
    path = "/api/rentals/{id}",
    params(("id" = uuid::Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental found", body = Rental),
        (status = 404, description = "Rental not found or malformed ID", body = vidly_core::ErrorResponse)
    ),
    tag = "Rentals"
)]
#[instrument(skip(state))]
pub async fn get_rental(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Rental>, AppError> {
    let rental = RentalService::get_rental(&state.db, id).await?;
    Ok(Json(rental))
}

#[utoipa::path(
    post,
    path = "/api/rentals",
    request_body = CreateRentalDto,
    responses(
        (status = 200, description = "Rental created", body = Rental),
        (status = 400, description = "Invalid customer or movie, or movie not in stock", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse)
    ),
    tag = "Rentals",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn create_rental(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRentalDto>,
) -> Result<Json<Rental>, AppError> {
    let rental = RentalService::create_rental(&state.db, dto).await?;
    Ok(Json(rental))
}
