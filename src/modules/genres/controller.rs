use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{Genre, GenreDto};

use crate::middleware::admin::AdminUser;
use crate::middleware::auth::AuthUser;
use crate::middleware::object_id::ValidId;
use crate::modules::genres::service::GenreService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "All genres sorted by name", body = Vec<Genre>)
    ),
    tag = "Genres"
)]
#[instrument(skip(state))]
pub async fn get_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    let genres = GenreService::get_genres(&state.db).await?;
    Ok(Json(genres))
}

#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    params(("id" = uuid::Uuid, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre found", body = Genre),
        (status = 404, description = "Genre not found or malformed ID", body = vidly_core::ErrorResponse)
    ),
    tag = "Genres"
)]
#[instrument(skip(state))]
pub async fn get_genre(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::get_genre(&state.db, id).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre created", body = Genre),
        (status = 400, description = "Invalid input", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse)
    ),
    tag = "Genres",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn create_genre(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::create_genre(&state.db, dto).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(("id" = uuid::Uuid, Path, description = "Genre ID")),
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, description = "Invalid input", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 404, description = "Genre not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Genres",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn update_genre(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidId(id): ValidId,
    ValidatedJson(dto): ValidatedJson<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::update_genre(&state.db, id, dto).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(("id" = uuid::Uuid, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted", body = Genre),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 403, description = "Forbidden - requires admin", body = vidly_core::ErrorResponse),
        (status = 404, description = "Genre not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Genres",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_genre(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidId(id): ValidId,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::delete_genre(&state.db, id).await?;
    Ok(Json(genre))
}
