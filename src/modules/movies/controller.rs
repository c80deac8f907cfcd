use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{Movie, MovieDto};

use crate::middleware::admin::AdminUser;
use crate::middleware::auth::AuthUser;
use crate::middleware::object_id::ValidId;
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "All movies sorted by title", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = MovieService::get_movies(&state.db).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = uuid::Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "Movie not found or malformed ID", body = vidly_core::ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::get_movie(&state.db, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid input or unknown genre", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse)
    ),
    tag = "Movies",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn create_movie(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::create_movie(&state.db, dto).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = uuid::Uuid, Path, description = "Movie ID")),
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid input or unknown genre", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 404, description = "Movie not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Movies",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn update_movie(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidId(id): ValidId,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::update_movie(&state.db, id, dto).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = uuid::Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = Movie),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 403, description = "Forbidden - requires admin", body = vidly_core::ErrorResponse),
        (status = 404, description = "Movie not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Movies",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidId(id): ValidId,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::delete_movie(&state.db, id).await?;
    Ok(Json(movie))
}
