use axum::{Json, extract::State};
use tracing::instrument;

use vidly_core::AppError;
use vidly_models::{Customer, CustomerDto};

use crate::middleware::admin::AdminUser;
use crate::middleware::auth::AuthUser;
use crate::middleware::object_id::ValidId;
use crate::modules::customers::service::CustomerService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers sorted by name", body = Vec<Customer>)
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = CustomerService::get_customers(&state.db).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = uuid::Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found or malformed ID", body = vidly_core::ErrorResponse)
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_customer(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::get_customer(&state.db, id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid input", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse)
    ),
    tag = "Customers",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn create_customer(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::create_customer(&state.db, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = uuid::Uuid, Path, description = "Customer ID")),
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid input", body = vidly_core::ErrorResponse),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 404, description = "Customer not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Customers",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn update_customer(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidId(id): ValidId,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::update_customer(&state.db, id, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = uuid::Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = Customer),
        (status = 401, description = "Unauthorized", body = vidly_core::ErrorResponse),
        (status = 403, description = "Forbidden - requires admin", body = vidly_core::ErrorResponse),
        (status = 404, description = "Customer not found", body = vidly_core::ErrorResponse)
    ),
    tag = "Customers",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_customer(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidId(id): ValidId,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::delete_customer(&state.db, id).await?;
    Ok(Json(customer))
}
