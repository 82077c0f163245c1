use common::{pagination::Pagination, time::parse_timestamp};
use models::{booking, room, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::info;

use super::{db_err, ensure_exists, fetch};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Timestamps are matched exactly after parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFilter {
    pub booking_date: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub user_id: Option<i32>,
    pub room_id: Option<i32>,
}

/// Plain booking without a payment. Use the reservation service to create both together.
pub async fn create_booking(db: &DatabaseConnection, input: CreateBooking) -> Result<booking::Model, ServiceError> {
    let check_in_date = parse_timestamp(&input.check_in_date)?;
    let check_out_date = parse_timestamp(&input.check_out_date)?;
    ensure_exists::<user::Entity>(db, input.user_id, "user").await?;
    ensure_exists::<room::Entity>(db, input.room_id, "room").await?;
    let created = booking::create(
        db,
        booking::NewBooking { user_id: input.user_id, room_id: input.room_id, check_in_date, check_out_date },
    )
    .await?;
    info!(booking_id = created.booking_id, user_id = created.user_id, room_id = created.room_id, "booking_created");
    Ok(created)
}

pub async fn get_booking(db: &DatabaseConnection, id: i32) -> Result<booking::Model, ServiceError> {
    booking::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Booking"))
}

pub async fn delete_booking(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = booking::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Booking"));
    }
    Ok(())
}

pub async fn list_bookings(
    db: &DatabaseConnection,
    filter: &BookingFilter,
    page: Option<Pagination>,
) -> Result<Vec<booking::Model>, ServiceError> {
    let mut q = booking::Entity::find().order_by_asc(booking::Column::BookingId);
    if let Some(raw) = &filter.booking_date {
        q = q.filter(booking::Column::BookingDate.eq(parse_timestamp(raw)?));
    }
    if let Some(raw) = &filter.check_in_date {
        q = q.filter(booking::Column::CheckInDate.eq(parse_timestamp(raw)?));
    }
    if let Some(raw) = &filter.check_out_date {
        q = q.filter(booking::Column::CheckOutDate.eq(parse_timestamp(raw)?));
    }
    if let Some(id) = filter.user_id {
        q = q.filter(booking::Column::UserId.eq(id));
    }
    if let Some(id) = filter.room_id {
        q = q.filter(booking::Column::RoomId.eq(id));
    }
    fetch(db, q, page).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_room, seed_user};

    #[tokio::test]
    async fn unknown_room_is_validation_error() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let u = seed_user(&db).await?;
        let res = create_booking(
            &db,
            CreateBooking {
                user_id: u.user_id,
                room_id: i32::MAX,
                check_in_date: "2024-01-01".into(),
                check_out_date: "2024-01-05".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        user::Entity::delete_by_id(u.user_id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn bookings_filter_by_check_in() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let u = seed_user(&db).await?;
        let r = seed_room(&db, 1).await?;
        let b = create_booking(
            &db,
            CreateBooking {
                user_id: u.user_id,
                room_id: r.room_id,
                check_in_date: "2031-03-07 14:00".into(),
                check_out_date: "2031-03-09".into(),
            },
        )
        .await?;

        let filter = BookingFilter {
            check_in_date: Some("2031-03-07T14:00:00Z".into()),
            user_id: Some(u.user_id),
            ..Default::default()
        };
        let found = list_bookings(&db, &filter, None).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].booking_id, b.booking_id);

        let bad = BookingFilter { booking_date: Some("yesterday".into()), ..Default::default() };
        assert!(matches!(list_bookings(&db, &bad, None).await, Err(ServiceError::Validation(_))));

        user::Entity::delete_by_id(u.user_id).exec(&db).await?;
        room::Entity::delete_by_id(r.room_id).exec(&db).await?;
        Ok(())
    }
}
