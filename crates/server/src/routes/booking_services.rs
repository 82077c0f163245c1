use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::booking_service;
use service::db::booking_services::{self, CreateBookingService, BookingServiceFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<BookingServiceFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<booking_service::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(booking_services::list_booking_services(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateBookingService>, JsonRejection>,
) -> Result<(StatusCode, Json<booking_service::Model>), JsonApiError> {
    let created = booking_services::create_booking_service(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<booking_service::Model>, JsonApiError> {
    Ok(Json(booking_services::get_booking_service(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    booking_services::delete_booking_service(&state.db, id).await?;
    info!(booking_service_id = id, "booking_service_deleted");
    Ok(StatusCode::NO_CONTENT)
}
