use common::pagination::Pagination;
use models::{booking, review, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{db_err, ensure_exists, fetch};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub rating: f64,
    pub user_id: i32,
    pub booking_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewFilter {
    pub rating: Option<f64>,
    pub user_id: Option<i32>,
    pub booking_id: Option<i32>,
}

pub async fn create_review(db: &DatabaseConnection, input: CreateReview) -> Result<review::Model, ServiceError> {
    ensure_exists::<user::Entity>(db, input.user_id, "user").await?;
    ensure_exists::<booking::Entity>(db, input.booking_id, "booking").await?;
    Ok(review::create(
        db,
        review::NewReview { rating: input.rating, user_id: input.user_id, booking_id: input.booking_id },
    )
    .await?)
}

pub async fn get_review(db: &DatabaseConnection, id: i32) -> Result<review::Model, ServiceError> {
    review::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Review"))
}

pub async fn delete_review(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = review::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Review"));
    }
    Ok(())
}

pub async fn list_reviews(
    db: &DatabaseConnection,
    filter: &ReviewFilter,
    page: Option<Pagination>,
) -> Result<Vec<review::Model>, ServiceError> {
    let mut q = review::Entity::find().order_by_asc(review::Column::ReviewId);
    if let Some(r) = filter.rating {
        q = q.filter(review::Column::Rating.eq(r));
    }
    if let Some(id) = filter.user_id {
        q = q.filter(review::Column::UserId.eq(id));
    }
    if let Some(id) = filter.booking_id {
        q = q.filter(review::Column::BookingId.eq(id));
    }
    fetch(db, q, page).await
}
