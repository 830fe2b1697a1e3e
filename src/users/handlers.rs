use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    dto::{CreatedResponse, StatusResponse},
    error::ApiError,
    extract::{EntityId, ValidJson},
    password::hash_password,
    state::AppState,
    store::StoreError,
};

use super::{
    dto::{CreateUserRequest, PatchUserRequest, PublicUser},
    repo_types::{NewUser, UserPatch},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(patch_user).delete(delete_user),
        )
}

fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::NotFound { .. } => ApiError::not_found("user not found"),
        StoreError::UniqueViolation => ApiError::bad_request("user already exists"),
        StoreError::ForeignKeyViolation => ApiError::bad_request("user is still referenced"),
        StoreError::Database(e) => ApiError::Internal(anyhow::Error::new(e).context("users store")),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_user = NewUser {
        password: hash_password(&payload.password)?,
        username: payload.username,
    };
    let id = match state.store.create_user(new_user).await {
        Ok(id) => id,
        Err(StoreError::UniqueViolation) => {
            warn!("username already taken");
            return Err(ApiError::bad_request("user already exists"));
        }
        Err(e) => return Err(store_error(e)),
    };
    info!(user_id = id, "user created");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state.store.get_user(id).await.map_err(store_error)?;
    Ok(Json(PublicUser {
        id_user: user.id,
        username: user.username,
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<StatusResponse>, ApiError> {
    state.store.delete_user(id).await.map_err(store_error)?;
    info!(user_id = id, "user deleted");
    Ok(Json(StatusResponse::deleted()))
}

#[instrument(skip(state, payload))]
pub async fn patch_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(payload): ValidJson<PatchUserRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let patch = UserPatch {
        username: payload.username,
        password: payload.password.as_deref().map(hash_password).transpose()?,
    };
    state.store.update_user(id, patch).await.map_err(store_error)?;
    info!(user_id = id, "user updated");
    Ok(Json(StatusResponse::success()))
}
