//! User API handlers
//!
//! Thin wrappers: validation happens in the extractor, persistence in
//! `UserService`.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::dto::{ShowUser, UserCreate};
use crate::application::UserService;
use crate::interfaces::http::common::{error_response, ApiError, ValidatedJson};

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: UserService,
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "User created", body = ShowUser),
        (status = 400, description = "Malformed body or email already exists"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Database unavailable")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<UserCreate>,
) -> Result<Json<ShowUser>, ApiError> {
    state
        .user_service
        .create_user(request.into())
        .await
        .map(|user| Json(ShowUser::from(user)))
        .map_err(error_response)
}

#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ShowUser),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ShowUser>, ApiError> {
    state
        .user_service
        .get_user(user_id)
        .await
        .map(|user| Json(ShowUser::from(user)))
        .map_err(error_response)
}
