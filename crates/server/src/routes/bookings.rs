use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::booking;
use service::db::bookings::{self, CreateBooking, BookingFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<BookingFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<booking::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(bookings::list_bookings(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateBooking>, JsonRejection>,
) -> Result<(StatusCode, Json<booking::Model>), JsonApiError> {
    let created = bookings::create_booking(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<booking::Model>, JsonApiError> {
    Ok(Json(bookings::get_booking(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    bookings::delete_booking(&state.db, id).await?;
    info!(booking_id = id, "booking_deleted");
    Ok(StatusCode::NO_CONTENT)
}
