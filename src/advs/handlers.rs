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
    state::AppState,
    store::StoreError,
};

use super::{
    dto::{AdvView, CreateAdvRequest, PatchAdvRequest},
    repo_types::{AdvPatch, NewAdv},
};

pub fn adv_routes() -> Router<AppState> {
    Router::new()
        .route("/advs/", post(create_adv))
        .route("/advs/:id", get(get_adv).patch(patch_adv).delete(delete_adv))
}

fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::NotFound { .. } => ApiError::not_found("advertisement not found"),
        StoreError::UniqueViolation => ApiError::bad_request("advertisement already exists"),
        StoreError::ForeignKeyViolation => ApiError::bad_request("user not found"),
        StoreError::Database(e) => {
            ApiError::Internal(anyhow::Error::new(e).context("advertisements store"))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_adv(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateAdvRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let user_id = payload.user_id;
    let new_adv = NewAdv {
        title: payload.title,
        description: payload.description,
        user_id,
    };
    let id = state.store.create_adv(new_adv).await.map_err(|e| {
        if matches!(e, StoreError::ForeignKeyViolation) {
            warn!(user_id, "advertisement for unknown user");
        }
        store_error(e)
    })?;
    info!(adv_id = id, user_id, "advertisement created");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state))]
pub async fn get_adv(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<AdvView>, ApiError> {
    let adv = state.store.get_adv(id).await.map_err(store_error)?;
    Ok(Json(adv.into()))
}

#[instrument(skip(state))]
pub async fn delete_adv(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<StatusResponse>, ApiError> {
    state.store.delete_adv(id).await.map_err(store_error)?;
    info!(adv_id = id, "advertisement deleted");
    Ok(Json(StatusResponse::deleted()))
}

#[instrument(skip(state, payload))]
pub async fn patch_adv(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(payload): ValidJson<PatchAdvRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let patch = AdvPatch {
        title: payload.title,
        description: payload.description,
    };
    state.store.update_adv(id, patch).await.map_err(store_error)?;
    info!(adv_id = id, "advertisement updated");
    Ok(Json(StatusResponse::success()))
}
