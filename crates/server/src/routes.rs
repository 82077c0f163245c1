use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    routing::{get, post},
    Json, Router,
};
use common::{pagination::Pagination, types::Health};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod booking_services;
pub mod bookings;
pub mod discounts;
pub mod payments;
pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod services;
pub mod statistics;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `page` / `per_page` query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageParams {
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::from_query(self.page, self.per_page)
    }
}

pub(crate) fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JsonApiError> {
    payload.map(|Json(v)| v).map_err(|r| JsonApiError::bad_request(r.body_text()))
}

pub(crate) fn query<T>(q: Result<axum::extract::Query<T>, QueryRejection>) -> Result<T, JsonApiError> {
    q.map(|axum::extract::Query(v)| v).map_err(|r| JsonApiError::bad_request(r.body_text()))
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let core = Router::new()
        .route("/create-booking", post(reservations::create_booking))
        .route("/update-room-availability", post(reservations::update_room_availability))
        .route("/statistics", get(statistics::statistics))
        .route("/filter/rooms", get(statistics::filter_rooms));

    let crud = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).delete(users::delete))
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route("/rooms/:id", get(rooms::get).delete(rooms::delete))
        .route("/room", post(rooms::create))
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route("/bookings/:id", get(bookings::get).delete(bookings::delete))
        .route("/payments", get(payments::list).post(payments::create))
        .route("/payments/:id", get(payments::get).delete(payments::delete))
        .route("/services", get(services::list).post(services::create))
        .route("/services/:id", get(services::get).delete(services::delete))
        .route("/booking-services", get(booking_services::list).post(booking_services::create))
        .route("/booking-services/:id", get(booking_services::get).delete(booking_services::delete))
        .route("/discounts", get(discounts::list).post(discounts::create))
        .route("/discounts/:id", get(discounts::get).delete(discounts::delete))
        .route("/reviews", get(reviews::list).post(reviews::create))
        .route("/reviews/:id", get(reviews::get).delete(reviews::delete));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(core)
        .merge(crud)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
