use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

/// Dates accept RFC 3339, `YYYY-MM-DD[ HH:MM[:SS]]` or `YYYY-MM-DDTHH:MM[:SS]`; offset-less values are UTC.
#[derive(ToSchema)]
pub struct CreateBookingRequest {
    pub user_id: i32,
    pub room_id: i32,
    #[schema(example = "2024-01-01")]
    pub check_in_date: String,
    #[schema(example = "2024-01-05")]
    pub check_out_date: String,
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,
    #[schema(example = "visa")]
    pub payment_method: String,
}

#[derive(ToSchema)]
pub struct BookingCreatedDoc {
    pub message: String,
    pub booking_id: i32,
    pub payment_id: i32,
    pub booking_date: DateTime<FixedOffset>,
    #[schema(value_type = String)]
    pub amount: Decimal,
}

#[derive(ToSchema)]
pub struct UpdateAvailabilityRequest { pub booking_id: Option<i32> }

#[derive(ToSchema)]
pub struct AvailabilityUpdatedDoc {
    pub message: String,
    pub booking_id: Option<i32>,
    pub decremented_by: i64,
    pub rooms_affected: u64,
}

#[derive(ToSchema)]
pub struct StatisticsDoc {
    pub total_users: u64,
    pub total_bookings: u64,
    #[schema(value_type = Option<String>)]
    pub total_payments: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub average_room_price: Option<Decimal>,
    pub total_services: u64,
    pub total_booking_services: u64,
    pub total_discounts: u64,
    pub total_reviews: u64,
    pub average_rating: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::reservations::create_booking,
        crate::routes::reservations::update_room_availability,
        crate::routes::statistics::statistics,
        crate::routes::statistics::filter_rooms,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CreateBookingRequest,
            BookingCreatedDoc,
            UpdateAvailabilityRequest,
            AvailabilityUpdatedDoc,
            StatisticsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "reservations"),
        (name = "aggregates")
    )
)]
pub struct ApiDoc;
