use common::pagination::Pagination;
use models::room;
use rust_decimal::Decimal;
use sea_orm::{sea_query::Condition, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::info;

use super::{db_err, fetch, icontains};
use crate::errors::ServiceError;

pub use models::room::NewRoom as CreateRoom;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomFilter {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub price_lte: Option<Decimal>,
    pub price_gte: Option<Decimal>,
    pub availability: Option<i32>,
}

/// Search used by `GET /filter/rooms`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomSearch {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search_term: Option<String>,
}

pub async fn create_room(db: &DatabaseConnection, input: CreateRoom) -> Result<room::Model, ServiceError> {
    let created = room::create(db, input).await?;
    info!(room_id = created.room_id, room_number = %created.room_number, "room_created");
    Ok(created)
}

pub async fn get_room(db: &DatabaseConnection, id: i32) -> Result<room::Model, ServiceError> {
    room::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Room"))
}

pub async fn delete_room(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = room::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Room"));
    }
    Ok(())
}

pub async fn list_rooms(
    db: &DatabaseConnection,
    filter: &RoomFilter,
    page: Option<Pagination>,
) -> Result<Vec<room::Model>, ServiceError> {
    let mut q = room::Entity::find().order_by_asc(room::Column::RoomId);
    if let Some(n) = &filter.room_number {
        q = q.filter(room::Column::RoomNumber.eq(n.clone()));
    }
    if let Some(t) = &filter.room_type {
        q = q.filter(room::Column::RoomType.eq(t.clone()));
    }
    if let Some(p) = filter.price_lte {
        q = q.filter(room::Column::Price.lte(p));
    }
    if let Some(p) = filter.price_gte {
        q = q.filter(room::Column::Price.gte(p));
    }
    if let Some(a) = filter.availability {
        q = q.filter(room::Column::Availability.eq(a));
    }
    fetch(db, q, page).await
}

/// Rooms within an optional price window whose number or type contains
/// `search_term`, ignoring case.
pub async fn filter_rooms(db: &DatabaseConnection, search: &RoomSearch) -> Result<Vec<room::Model>, ServiceError> {
    let mut q = room::Entity::find().order_by_asc(room::Column::RoomId);
    if let Some(min) = search.min_price {
        q = q.filter(room::Column::Price.gte(min));
    }
    if let Some(max) = search.max_price {
        q = q.filter(room::Column::Price.lte(max));
    }
    if let Some(term) = search.search_term.as_deref().filter(|t| !t.is_empty()) {
        q = q.filter(
            Condition::any()
                .add(icontains(room::Column::RoomNumber, term))
                .add(icontains(room::Column::RoomType, term)),
        );
    }
    q.all(db).await.map_err(db_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use crate::test_support::{get_db, unique};

    #[tokio::test]
    async fn room_filter_matches_type_case_insensitively() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };

        let kind = unique("Penthouse");
        let cheap = create_room(
            &db,
            CreateRoom { room_number: unique("p1"), room_type: kind.clone(), price: Decimal::from_str("90.00")?, availability: 1 },
        )
        .await?;
        let pricey = create_room(
            &db,
            CreateRoom { room_number: unique("p2"), room_type: kind.clone(), price: Decimal::from_str("900.00")?, availability: 1 },
        )
        .await?;

        let search = RoomSearch {
            min_price: Some(Decimal::from_str("50")?),
            max_price: Some(Decimal::from_str("100")?),
            search_term: Some(kind.to_uppercase()),
        };
        let found = filter_rooms(&db, &search).await?;
        assert_eq!(found.iter().map(|r| r.room_id).collect::<Vec<_>>(), vec![cheap.room_id]);

        let listed = list_rooms(&db, &RoomFilter { room_type: Some(kind), ..Default::default() }, None).await?;
        assert_eq!(listed.len(), 2);

        delete_room(&db, cheap.room_id).await?;
        delete_room(&db, pricey.room_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_room_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let err = get_room(&db, i32::MAX).await.unwrap_err();
        assert_eq!(err.to_string(), "Room not found");
        Ok(())
    }
}
