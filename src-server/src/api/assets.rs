use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    api::{parse_id, persons::not_found_owner},
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Asset, AssetPayload, Confirmation},
};

#[utoipa::path(get, path = "/api/v1/assets", responses((status = 200, body = [Asset])))]
pub(crate) async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.list_assets()?;
    Ok(Json(assets.into_iter().map(Asset::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/assets", request_body = AssetPayload,
    responses((status = 201, body = Asset), (status = 400, description = "Missing or invalid fields"), (status = 404, description = "Owner not found")))]
pub(crate) async fn create_asset(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssetPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_asset = payload.into_new_asset()?;

    // Verify the owner exists before attempting the write
    state
        .person_service
        .get_person(new_asset.person_id)
        .map_err(not_found_owner)?;

    let created = state.asset_service.create_asset(new_asset)?;
    Ok((StatusCode::CREATED, Json(Asset::from(created))))
}

#[utoipa::path(get, path = "/api/v1/assets/{id}",
    responses((status = 200, body = Asset), (status = 400, description = "Invalid id"), (status = 404)))]
pub(crate) async fn get_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Asset>> {
    let asset_id = parse_id(&id, "asset")?;
    let asset = state.asset_service.get_asset(asset_id)?;
    Ok(Json(Asset::from(asset)))
}

#[utoipa::path(put, path = "/api/v1/assets/{id}", request_body = AssetPayload,
    responses((status = 200, body = Asset), (status = 400), (status = 404)))]
pub(crate) async fn update_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssetPayload>, JsonRejection>,
) -> ApiResult<Json<Asset>> {
    let asset_id = parse_id(&id, "asset")?;
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let asset_update = payload.into_asset_update()?;

    // Verify the owner exists before attempting the write
    state
        .person_service
        .get_person(asset_update.person_id)
        .map_err(not_found_owner)?;

    let updated = state.asset_service.update_asset(asset_id, asset_update)?;
    Ok(Json(Asset::from(updated)))
}

#[utoipa::path(delete, path = "/api/v1/assets/{id}",
    responses((status = 200, body = Confirmation), (status = 400), (status = 404)))]
pub(crate) async fn delete_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Confirmation>> {
    let asset_id = parse_id(&id, "asset")?;
    state.asset_service.delete_asset(asset_id)?;
    Ok(Json(Confirmation::new("Asset deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
