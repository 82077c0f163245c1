//! `/services`: billable hotel extras.
use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::hotel_service;
use service::db::amenities::{self, CreateService, ServiceFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<ServiceFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<hotel_service::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(amenities::list_services(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateService>, JsonRejection>,
) -> Result<(StatusCode, Json<hotel_service::Model>), JsonApiError> {
    let created = amenities::create_service(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<hotel_service::Model>, JsonApiError> {
    Ok(Json(amenities::get_service(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    amenities::delete_service(&state.db, id).await?;
    info!(service_id = id, "service_deleted");
    Ok(StatusCode::NO_CONTENT)
}
