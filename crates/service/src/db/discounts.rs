use common::pagination::Pagination;
use models::{discount, discount_service, hotel_service};
use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionError,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{db_err, fetch, icontains};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDiscount {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub percentage: f64,
    /// Matched against existing services by all fields; missing ones are created.
    #[serde(default)]
    pub services: Vec<hotel_service::NewService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscountFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub percentage: Option<f64>,
    pub service_name: Option<String>,
}

/// A discount with the services it applies to nested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountWithServices {
    #[serde(flatten)]
    pub discount: discount::Model,
    pub services: Vec<hotel_service::Model>,
}

pub async fn create_discount(db: &DatabaseConnection, input: CreateDiscount) -> Result<DiscountWithServices, ServiceError> {
    let created = db
        .transaction::<_, DiscountWithServices, ServiceError>(|txn| {
            Box::pin(async move {
                let d = discount::create(
                    txn,
                    discount::NewDiscount { name: input.name, description: input.description, percentage: input.percentage },
                )
                .await?;
                let mut services = Vec::with_capacity(input.services.len());
                for new in input.services {
                    let s = hotel_service::get_or_create(txn, new).await?;
                    discount_service::link(txn, d.discount_id, s.service_id).await?;
                    if !services.iter().any(|x: &hotel_service::Model| x.service_id == s.service_id) {
                        services.push(s);
                    }
                }
                Ok(DiscountWithServices { discount: d, services })
            })
        })
        .await
        .map_err(|e| match e {
            TransactionError::Connection(e) => db_err(e),
            TransactionError::Transaction(e) => e,
        })?;
    info!(discount_id = created.discount.discount_id, services = created.services.len(), "discount_created");
    Ok(created)
}

async fn with_services(db: &DatabaseConnection, d: discount::Model) -> Result<DiscountWithServices, ServiceError> {
    let services = d
        .find_related(hotel_service::Entity)
        .order_by_asc(hotel_service::Column::ServiceId)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(DiscountWithServices { discount: d, services })
}

pub async fn get_discount(db: &DatabaseConnection, id: i32) -> Result<DiscountWithServices, ServiceError> {
    let d = discount::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Discount"))?;
    with_services(db, d).await
}

pub async fn delete_discount(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = discount::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Discount"));
    }
    Ok(())
}

pub async fn list_discounts(
    db: &DatabaseConnection,
    filter: &DiscountFilter,
    page: Option<Pagination>,
) -> Result<Vec<DiscountWithServices>, ServiceError> {
    let mut q = discount::Entity::find().order_by_asc(discount::Column::DiscountId);
    if let Some(name) = &filter.name {
        q = q.filter(icontains(discount::Column::Name, name));
    }
    if let Some(desc) = &filter.description {
        q = q.filter(icontains(discount::Column::Description, desc));
    }
    if let Some(p) = filter.percentage {
        q = q.filter(discount::Column::Percentage.eq(p));
    }
    if let Some(service_name) = &filter.service_name {
        // discount ids linked to at least one matching service
        let linked = Query::select()
            .column((discount_service::Entity, discount_service::Column::DiscountId))
            .from(discount_service::Entity)
            .inner_join(
                hotel_service::Entity,
                Expr::col((hotel_service::Entity, hotel_service::Column::ServiceId))
                    .equals((discount_service::Entity, discount_service::Column::ServiceId)),
            )
            .and_where(icontains((hotel_service::Entity, hotel_service::Column::Name), service_name))
            .to_owned();
        q = q.filter(discount::Column::DiscountId.in_subquery(linked));
    }
    let rows = fetch(db, q, page).await?;
    let mut out = Vec::with_capacity(rows.len());
    for d in rows {
        out.push(with_services(db, d).await?);
    }
    Ok(out)
}
