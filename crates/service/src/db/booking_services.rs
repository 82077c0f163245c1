use common::{pagination::Pagination, time::parse_timestamp};
use models::{booking, booking_service, hotel_service};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{db_err, ensure_exists, fetch};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingService {
    pub booking_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    /// Defaults to now.
    #[serde(default)]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingServiceFilter {
    pub booking_id: Option<i32>,
    pub service_id: Option<i32>,
    pub quantity: Option<i32>,
    pub date_time: Option<String>,
}

pub async fn create_booking_service(
    db: &DatabaseConnection,
    input: CreateBookingService,
) -> Result<booking_service::Model, ServiceError> {
    let date_time = input.date_time.as_deref().map(parse_timestamp).transpose()?;
    ensure_exists::<booking::Entity>(db, input.booking_id, "booking").await?;
    ensure_exists::<hotel_service::Entity>(db, input.service_id, "service").await?;
    Ok(booking_service::create(
        db,
        booking_service::NewBookingService {
            booking_id: input.booking_id,
            service_id: input.service_id,
            quantity: input.quantity,
            date_time,
        },
    )
    .await?)
}

pub async fn get_booking_service(db: &DatabaseConnection, id: i32) -> Result<booking_service::Model, ServiceError> {
    booking_service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("BookingService"))
}

pub async fn delete_booking_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = booking_service::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("BookingService"));
    }
    Ok(())
}

pub async fn list_booking_services(
    db: &DatabaseConnection,
    filter: &BookingServiceFilter,
    page: Option<Pagination>,
) -> Result<Vec<booking_service::Model>, ServiceError> {
    let mut q = booking_service::Entity::find().order_by_asc(booking_service::Column::BookingServiceId);
    if let Some(id) = filter.booking_id {
        q = q.filter(booking_service::Column::BookingId.eq(id));
    }
    if let Some(id) = filter.service_id {
        q = q.filter(booking_service::Column::ServiceId.eq(id));
    }
    if let Some(n) = filter.quantity {
        q = q.filter(booking_service::Column::Quantity.eq(n));
    }
    if let Some(raw) = &filter.date_time {
        q = q.filter(booking_service::Column::DateTime.eq(parse_timestamp(raw)?));
    }
    fetch(db, q, page).await
}
