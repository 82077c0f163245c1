use models::{booking, booking_service, payment, room};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, TransactionError,
    TransactionTrait,
};

use crate::errors::ServiceError;
use crate::reservation::domain::{BookingDraft, BookingReceipt, PaymentDraft};
use crate::reservation::repository::ReservationRepository;

pub struct SeaOrmReservationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create_booking_with_payment(&self, draft: BookingDraft, pay: PaymentDraft) -> Result<BookingReceipt, ServiceError> {
        self.db
            .transaction::<_, BookingReceipt, ServiceError>(|txn| {
                Box::pin(async move {
                    let b = booking::create(
                        txn,
                        booking::NewBooking {
                            user_id: draft.user_id,
                            room_id: draft.room_id,
                            check_in_date: draft.check_in_date,
                            check_out_date: draft.check_out_date,
                        },
                    )
                    .await?;
                    // A failure here rolls back the booking above.
                    let p = payment::create(
                        txn,
                        payment::NewPayment {
                            booking_id: b.booking_id,
                            amount: pay.amount,
                            payment_method: pay.payment_method,
                        },
                    )
                    .await?;
                    Ok(BookingReceipt {
                        booking_id: b.booking_id,
                        payment_id: p.payment_id,
                        booking_date: b.booking_date,
                        amount: p.amount,
                    })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => ServiceError::Db(e.to_string()),
                TransactionError::Transaction(e) => e,
            })
    }

    async fn count_booking_services(&self, booking_id: i32) -> Result<i64, ServiceError> {
        let n = booking_service::Entity::find()
            .filter(booking_service::Column::BookingId.eq(booking_id))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        i64::try_from(n).map_err(|_| ServiceError::Db("booking service count overflow".into()))
    }

    async fn decrement_all_rooms(&self, by: i64) -> Result<u64, ServiceError> {
        // One UPDATE over every row; no WHERE clause.
        let res = room::Entity::update_many()
            .col_expr(room::Column::Availability, Expr::col(room::Column::Availability).sub(by))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use chrono::Utc;
    use rust_decimal::Decimal;
    use models::{hotel_service, user};

    use crate::test_support::{get_db, seed_room, seed_user, unique};

    fn draft(user_id: i32, room_id: i32) -> BookingDraft {
        BookingDraft { user_id, room_id, check_in_date: Utc::now().into(), check_out_date: Utc::now().into() }
    }

    #[tokio::test]
    async fn invalid_payment_rolls_back_booking() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmReservationRepository::new(db.clone());
        let u = seed_user(&db).await?;
        let r = seed_room(&db, 1).await?;

        let res = repo
            .create_booking_with_payment(
                draft(u.user_id, r.room_id),
                PaymentDraft { amount: Decimal::from_str("12.345")?, payment_method: "visa".into() },
            )
            .await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        let left = booking::Entity::find().filter(booking::Column::UserId.eq(u.user_id)).count(&db).await?;
        assert_eq!(left, 0);

        let ok = repo
            .create_booking_with_payment(
                draft(u.user_id, r.room_id),
                PaymentDraft { amount: Decimal::from_str("150.00")?, payment_method: "visa".into() },
            )
            .await?;
        let stored = payment::Entity::find_by_id(ok.payment_id).one(&db).await?.expect("payment");
        assert_eq!(stored.booking_id, ok.booking_id);
        assert_eq!(stored.amount, Decimal::from_str("150.00")?);

        user::Entity::delete_by_id(u.user_id).exec(&db).await?;
        room::Entity::delete_by_id(r.room_id).exec(&db).await?;
        Ok(())
    }

    // The only test in this crate that runs the bulk decrement, so the
    // absolute values below are not disturbed by parallel tests.
    #[tokio::test]
    async fn decrement_applies_to_all_rooms_each_call() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmReservationRepository::new(db.clone());
        let u = seed_user(&db).await?;
        let rooms = [seed_room(&db, 5).await?, seed_room(&db, 2).await?, seed_room(&db, 10).await?];
        let receipt = repo
            .create_booking_with_payment(
                draft(u.user_id, rooms[0].room_id),
                PaymentDraft { amount: Decimal::from_str("99.00")?, payment_method: "cash".into() },
            )
            .await?;
        let extra = hotel_service::create(
            &db,
            hotel_service::NewService { name: unique("minibar"), description: String::new(), price: Decimal::ONE },
        )
        .await?;
        for _ in 0..3 {
            booking_service::create(
                &db,
                booking_service::NewBookingService {
                    booking_id: receipt.booking_id,
                    service_id: extra.service_id,
                    quantity: 1,
                    date_time: None,
                },
            )
            .await?;
        }

        let n = repo.count_booking_services(receipt.booking_id).await?;
        assert_eq!(n, 3);
        let touched = repo.decrement_all_rooms(n).await?;
        assert!(touched >= 3);

        let after = |id: i32| {
            let db = db.clone();
            async move { room::Entity::find_by_id(id).one(&db).await.map(|r| r.map(|r| r.availability)) }
        };
        assert_eq!(after(rooms[0].room_id).await?, Some(2));
        assert_eq!(after(rooms[1].room_id).await?, Some(-1));
        assert_eq!(after(rooms[2].room_id).await?, Some(7));

        repo.decrement_all_rooms(n).await?;
        assert_eq!(after(rooms[1].room_id).await?, Some(-4));

        assert_eq!(repo.count_booking_services(i32::MAX).await?, 0);

        user::Entity::delete_by_id(u.user_id).exec(&db).await?;
        for r in &rooms {
            room::Entity::delete_by_id(r.room_id).exec(&db).await?;
        }
        hotel_service::Entity::delete_by_id(extra.service_id).exec(&db).await?;
        Ok(())
    }
}
