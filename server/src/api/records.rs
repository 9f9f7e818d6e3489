//! Collection record handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use order_sync::{ApiResponse, ReorderRequest, ADMIN_ROLE};

use crate::auth::CurrentUser;
use crate::domain::{CollectionKind, NewRecord, Record};
use crate::error::AppResult;
use crate::repository::{CollectionRepository, PositioningRepository};
use crate::AppState;

/// GET /api/{collection}
pub async fn list(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Record>>>> {
    let collection = CollectionKind::parse(&collection)?;
    let records = state.repo.list(collection).await?;
    tracing::debug!(collection = collection.as_str(), count = records.len(), "Listed records");
    Ok(Json(ApiResponse::ok(records)))
}

/// POST /api/{collection}
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(collection): Path<String>,
    Json(payload): Json<NewRecord>,
) -> AppResult<(StatusCode, Json<ApiResponse<Record>>)> {
    user.require_role(ADMIN_ROLE)?;
    let collection = CollectionKind::parse(&collection)?;
    let record = state.repo.create(collection, &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

/// PATCH /api/{collection}/rearrange
///
/// The body must list every stored id exactly once. Positions are rewritten
/// in one transaction; concurrent writers simply overwrite each other.
pub async fn rearrange(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(collection): Path<String>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    user.require_role(ADMIN_ROLE)?;
    let collection = CollectionKind::parse(&collection)?;
    state.repo.apply_order(collection, &payload.ordered_ids).await?;
    Ok(Json(ApiResponse::message("Order updated")))
}
