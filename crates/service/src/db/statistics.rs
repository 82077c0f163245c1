//! Aggregate counters for `GET /statistics`.
use models::{booking, booking_service, discount, hotel_service, payment, review, room, user};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect,
};
use serde::Serialize;

use super::db_err;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_users: u64,
    pub total_bookings: u64,
    /// Sum of all payment amounts; `None` when there are no payments.
    pub total_payments: Option<Decimal>,
    pub average_room_price: Option<Decimal>,
    pub total_services: u64,
    pub total_booking_services: u64,
    pub total_discounts: u64,
    pub total_reviews: u64,
    pub average_rating: Option<f64>,
}

pub async fn collect(db: &DatabaseConnection) -> Result<Statistics, ServiceError> {
    let total_payments: Option<Decimal> = payment::Entity::find()
        .select_only()
        .column_as(SimpleExpr::from(Func::sum(Expr::col(payment::Column::Amount))), "total")
        .into_tuple::<Option<Decimal>>()
        .one(db)
        .await
        .map_err(db_err)?
        .flatten();
    let average_room_price: Option<Decimal> = room::Entity::find()
        .select_only()
        .column_as(SimpleExpr::from(Func::avg(Expr::col(room::Column::Price))), "average")
        .into_tuple::<Option<Decimal>>()
        .one(db)
        .await
        .map_err(db_err)?
        .flatten()
        .map(|avg| avg.round_dp(2));
    let average_rating: Option<f64> = review::Entity::find()
        .select_only()
        .column_as(SimpleExpr::from(Func::avg(Expr::col(review::Column::Rating))), "average")
        .into_tuple::<Option<f64>>()
        .one(db)
        .await
        .map_err(db_err)?
        .flatten();

    Ok(Statistics {
        total_users: user::Entity::find().count(db).await.map_err(db_err)?,
        total_bookings: booking::Entity::find().count(db).await.map_err(db_err)?,
        total_payments,
        average_room_price,
        total_services: hotel_service::Entity::find().count(db).await.map_err(db_err)?,
        total_booking_services: booking_service::Entity::find().count(db).await.map_err(db_err)?,
        total_discounts: discount::Entity::find().count(db).await.map_err(db_err)?,
        total_reviews: review::Entity::find().count(db).await.map_err(db_err)?,
        average_rating,
    })
}
