//! Handlers for user endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::user::{CreateUserRequest, UserItem};
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "a@x.com" }
/// ```
///
/// # Response
///
/// `201 Created` with an empty body.
///
/// # Errors
///
/// Returns 400 with an empty body if `name` or `email` is missing or empty,
/// or if the body is not a JSON object.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    let new_user = NewUser::try_from(payload)?;

    state.user_service.create_user(new_user).await?;

    Ok(StatusCode::CREATED)
}

/// Lists every user.
///
/// # Endpoint
///
/// `GET /users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}
