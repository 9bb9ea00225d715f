use crate::{
    middleware::validate::{EntityId, SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynUserCommandService, DynUserQueryService},
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::{MessageResponse, UserResponse},
    },
    errors::{ErrorResponse, HttpError, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/users",
    tag = "User",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<UserResponse>)
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "ID is not an integer", body = ValidationErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 422, description = "Validation error", body = ValidationErrorResponse)
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ValidationErrorResponse)
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserCommandService>,
    EntityId(id): EntityId,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_user(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserCommandService>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_user(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(Extension(app_state.di_container.user_service.query.clone()))
        .layer(Extension(app_state.di_container.user_service.command.clone()))
}
