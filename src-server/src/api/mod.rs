use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::ApiError,
    main_lib::AppState,
    models::{Asset, AssetPayload, Confirmation, Person, PersonPayload},
};

pub mod assets;
pub mod health;
pub mod persons;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        persons::list_persons,
        persons::create_person,
        persons::get_person,
        persons::update_person,
        persons::delete_person,
        persons::list_person_assets,
        assets::list_assets,
        assets::create_asset,
        assets::get_asset,
        assets::update_asset,
        assets::delete_asset,
    ),
    components(schemas(Person, PersonPayload, Asset, AssetPayload, Confirmation)),
    tags((name = "assetledger"))
)]
pub struct ApiDoc;

/// Parses a path segment that must be a numeric identifier.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} ID", entity)))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(persons::router())
        .merge(assets::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
