use std::sync::Arc;

use assetledger_core::errors::Error as CoreError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    api::parse_id,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Asset, Confirmation, Person, PersonPayload},
};

#[utoipa::path(get, path = "/api/v1/persons", responses((status = 200, body = [Person])))]
pub(crate) async fn list_persons(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.person_service.list_persons()?;
    Ok(Json(persons.into_iter().map(Person::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/persons", request_body = PersonPayload,
    responses((status = 201, body = Person), (status = 400, description = "Missing fields or duplicate email")))]
pub(crate) async fn create_person(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let created = state.person_service.create_person(payload.into_new_person()?)?;
    Ok((StatusCode::CREATED, Json(Person::from(created))))
}

#[utoipa::path(get, path = "/api/v1/persons/{id}",
    responses((status = 200, body = Person), (status = 400, description = "Invalid id"), (status = 404)))]
pub(crate) async fn get_person(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Person>> {
    let person_id = parse_id(&id, "person")?;
    let person = state.person_service.get_person(person_id)?;
    Ok(Json(Person::from(person)))
}

#[utoipa::path(put, path = "/api/v1/persons/{id}", request_body = PersonPayload,
    responses((status = 200, body = Person), (status = 400), (status = 404)))]
pub(crate) async fn update_person(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<Json<Person>> {
    let person_id = parse_id(&id, "person")?;
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let updated = state
        .person_service
        .update_person(person_id, payload.into_person_update()?)?;
    Ok(Json(Person::from(updated)))
}

#[utoipa::path(delete, path = "/api/v1/persons/{id}",
    responses((status = 200, body = Confirmation), (status = 400), (status = 404)))]
pub(crate) async fn delete_person(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Confirmation>> {
    let person_id = parse_id(&id, "person")?;
    state.person_service.delete_person(person_id)?;
    Ok(Json(Confirmation::new("Person deleted successfully")))
}

#[utoipa::path(get, path = "/api/v1/persons/{id}/assets",
    responses((status = 200, body = [Asset]), (status = 400), (status = 404)))]
pub(crate) async fn list_person_assets(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Asset>>> {
    let person_id = parse_id(&id, "person")?;
    // 404 for an unknown person rather than an empty listing
    state
        .person_service
        .get_person(person_id)
        .map_err(not_found_owner)?;
    let assets = state.asset_service.list_assets_by_person(person_id)?;
    Ok(Json(assets.into_iter().map(Asset::from).collect()))
}

pub(crate) fn not_found_owner(e: CoreError) -> ApiError {
    match e {
        CoreError::NotFound(_) => ApiError::NotFound("Person not found".to_string()),
        other => ApiError::Core(other),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/persons/{id}/assets", get(list_person_assets))
}
