use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::reservation::domain::{AvailabilityAdjustment, BookingReceipt, CreateBookingInput};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct BookingCreated {
    pub message: &'static str,
    #[serde(flatten)]
    pub receipt: BookingReceipt,
}

/// Missing or `null` `booking_id` counts no line items.
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityInput {
    #[serde(default, deserialize_with = "common::ids::opt_id")]
    pub booking_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityUpdated {
    pub message: &'static str,
    #[serde(flatten)]
    pub adjustment: AvailabilityAdjustment,
}

#[utoipa::path(
    post, path = "/create-booking", tag = "reservations",
    request_body = crate::openapi::CreateBookingRequest,
    responses(
        (status = 201, description = "Booking and payment committed together", body = crate::openapi::BookingCreatedDoc),
        (status = 400, description = "Nothing was written", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_booking(
    State(state): State<ServerState>,
    payload: Result<Json<CreateBookingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreated>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::client(r.body_text()))?;
    let receipt = state.reservations.create_booking(input).await.map_err(JsonApiError::client)?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreated { message: "Booking and payment created successfully", receipt }),
    ))
}

#[utoipa::path(
    post, path = "/update-room-availability", tag = "reservations",
    request_body = crate::openapi::UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Every room decremented by the booking's service count", body = crate::openapi::AvailabilityUpdatedDoc),
        (status = 400, description = "Malformed body or persistence failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_room_availability(
    State(state): State<ServerState>,
    payload: Result<Json<UpdateAvailabilityInput>, JsonRejection>,
) -> Result<Json<AvailabilityUpdated>, JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::client(r.body_text()))?;
    let adjustment = state.reservations.adjust_availability(input.booking_id).await.map_err(JsonApiError::client)?;
    Ok(Json(AvailabilityUpdated { message: "Room availability updated successfully", adjustment }))
}
