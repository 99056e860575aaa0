//! User Handlers
//!
//! Maps each HTTP request onto one `UserService` call and the outcome onto a
//! status code and JSON body. Service failures become 500 through `AppError`.
//! Request bodies are not checked here; the store decides what it accepts.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::domain::{NewUser, User, UserChanges, UserLookup};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Parse the `{id}` path segment into the store's id type.
fn parse_user_id(user_id: &str) -> Result<i64, AppError> {
    user_id
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid user ID: {}", user_id)))
}

/// Body as received. One that cannot be read as JSON is forwarded as an empty
/// record.
fn json_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::warn!(
                error = %rejection.body_text(),
                "Unreadable request body, forwarding empty record"
            );
            T::default()
        }
    }
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    match state.users.get_user_by_id(user_id).await? {
        UserLookup::Found(user) => Ok(Json(user)),
        UserLookup::NotFound => Err(AppError::user_not_found()),
    }
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = json_body(body);
    let user = state.users.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<UserChanges>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let changes = json_body(body);

    let user = state.users.update_user(user_id, changes).await?;
    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_user_id(&user_id)?;

    state.users.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
