use common::{pagination::Pagination, time::parse_timestamp};
use models::{booking, payment};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::info;

use super::{db_err, ensure_exists, fetch};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub booking_id: i32,
    pub amount: Decimal,
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentFilter {
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub payment_method: Option<String>,
    pub booking_id: Option<i32>,
}

pub async fn create_payment(db: &DatabaseConnection, input: CreatePayment) -> Result<payment::Model, ServiceError> {
    ensure_exists::<booking::Entity>(db, input.booking_id, "booking").await?;
    let created = payment::create(
        db,
        payment::NewPayment { booking_id: input.booking_id, amount: input.amount, payment_method: input.payment_method },
    )
    .await?;
    info!(payment_id = created.payment_id, booking_id = created.booking_id, "payment_created");
    Ok(created)
}

pub async fn get_payment(db: &DatabaseConnection, id: i32) -> Result<payment::Model, ServiceError> {
    payment::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Payment"))
}

pub async fn delete_payment(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = payment::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Payment"));
    }
    Ok(())
}

pub async fn list_payments(
    db: &DatabaseConnection,
    filter: &PaymentFilter,
    page: Option<Pagination>,
) -> Result<Vec<payment::Model>, ServiceError> {
    let mut q = payment::Entity::find().order_by_asc(payment::Column::PaymentId);
    if let Some(a) = filter.amount {
        q = q.filter(payment::Column::Amount.eq(a));
    }
    if let Some(raw) = &filter.date {
        q = q.filter(payment::Column::Date.eq(parse_timestamp(raw)?));
    }
    if let Some(m) = &filter.payment_method {
        q = q.filter(payment::Column::PaymentMethod.eq(m.clone()));
    }
    if let Some(id) = filter.booking_id {
        q = q.filter(payment::Column::BookingId.eq(id));
    }
    fetch(db, q, page).await
}
