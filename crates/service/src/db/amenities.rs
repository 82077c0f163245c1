//! Operations on the `service` table (hotel extras).
use common::pagination::Pagination;
use models::hotel_service;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use super::{db_err, fetch, icontains};
use crate::errors::ServiceError;

pub use models::hotel_service::NewService as CreateService;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFilter {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

pub async fn create_service(db: &DatabaseConnection, input: CreateService) -> Result<hotel_service::Model, ServiceError> {
    Ok(hotel_service::create(db, input).await?)
}

pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<hotel_service::Model, ServiceError> {
    hotel_service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Service"))
}

pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = hotel_service::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Service"));
    }
    Ok(())
}

pub async fn list_services(
    db: &DatabaseConnection,
    filter: &ServiceFilter,
    page: Option<Pagination>,
) -> Result<Vec<hotel_service::Model>, ServiceError> {
    let mut q = hotel_service::Entity::find().order_by_asc(hotel_service::Column::ServiceId);
    if let Some(name) = &filter.name {
        q = q.filter(icontains(hotel_service::Column::Name, name));
    }
    if let Some(p) = filter.price {
        q = q.filter(hotel_service::Column::Price.eq(p));
    }
    fetch(db, q, page).await
}
