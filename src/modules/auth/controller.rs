use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{LoginRequest, LoginResponse};

use crate::metrics::track_token_issued;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Log in and receive an identity token
#[utoipa::path(
    post,
    path = "/api/auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid input or invalid email or password", body = vidly_core::ErrorResponse),
        (status = 429, description = "Too many login attempts")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    track_token_issued("login");
    Ok(Json(response))
}
