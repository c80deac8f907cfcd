use axum::{Json, extract::State};
use tracing::instrument;

use vidly_auth::create_auth_token;
use vidly_core::AppError;
use vidly_models::{RegisterUserDto, User};

use crate::metrics::track_token_issued;
use crate::middleware::auth::{AUTH_TOKEN_HEADER, AuthUser};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
///
/// The new user's identity token is returned in the `x-auth-token` response
/// header.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = User,
            headers(("x-auth-token" = String, description = "Identity token for the new user"))),
        (status = 400, description = "Invalid input or user already registered", body = vidly_core::ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<([(&'static str, String); 1], Json<User>), AppError> {
    let user = UserService::register_user(&state.db, dto).await?;
    let token = create_auth_token(user.id, user.is_admin, &state.jwt_config)?;
    track_token_issued("register");

    Ok(([(AUTH_TOKEN_HEADER, token)], Json(user)))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 404, description = "User no longer exists", body = vidly_core::ErrorResponse)
    ),
    tag = "Users",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id()?).await?;
    Ok(Json(user))
}
