//! Vehicle owner and plate request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{OwnerPage, OwnerSearchParams, PageParams, PlateNumberDto, VehicleOwnerDto};
use crate::services::owners;

/// `POST /api/owners` — register a new vehicle owner.
pub async fn register_owner_handler(
    State(state): State<AppState>,
    Json(body): Json<VehicleOwnerDto>,
) -> AppResult<Json<VehicleOwnerDto>> {
    let resp = owners::register_owner(&state.pool, &body).await?;
    Ok(Json(resp))
}

/// `GET /api/owners?page&size` — paginated owner listing.
pub async fn list_owners_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<OwnerPage>> {
    let resp = owners::list_owners(&state.pool, params.page, params.size).await?;
    Ok(Json(resp))
}

/// `GET /api/owners/search?nationalId|phone` — look one owner up.
pub async fn search_owner_handler(
    State(state): State<AppState>,
    Query(params): Query<OwnerSearchParams>,
) -> AppResult<Json<VehicleOwnerDto>> {
    let resp = owners::search_owner(&state.pool, &params).await?;
    Ok(Json(resp))
}

/// `POST /api/owners/{owner_id}/plate` — attach a plate number to an owner.
pub async fn register_plate_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
    Json(body): Json<PlateNumberDto>,
) -> AppResult<Json<PlateNumberDto>> {
    let resp = owners::register_plate(&state.pool, owner_id, &body).await?;
    Ok(Json(resp))
}

/// `GET /api/owners/{owner_id}/plates` — list an owner's plates.
pub async fn list_plates_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
) -> AppResult<Json<Vec<PlateNumberDto>>> {
    let resp = owners::list_plates(&state.pool, owner_id).await?;
    Ok(Json(resp))
}
