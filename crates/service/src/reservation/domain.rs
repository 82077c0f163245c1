use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /create-booking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingInput {
    #[serde(deserialize_with = "common::ids::id")]
    pub user_id: i32,
    #[serde(deserialize_with = "common::ids::id")]
    pub room_id: i32,
    pub check_in_date: String,
    pub check_out_date: String,
    pub amount: Decimal,
    pub payment_method: String,
}

/// Booking row to insert, with stay dates already parsed.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTime<FixedOffset>,
    pub check_out_date: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct PaymentDraft {
    pub amount: Decimal,
    pub payment_method: String,
}

/// Identifiers of the committed booking/payment pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub booking_id: i32,
    pub payment_id: i32,
    pub booking_date: DateTime<FixedOffset>,
    pub amount: Decimal,
}

/// Outcome of one availability adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityAdjustment {
    /// `None` when the request named no booking.
    pub booking_id: Option<i32>,
    /// Number of booking-service rows found for the booking.
    pub decremented_by: i64,
    pub rooms_affected: u64,
}
