//! CRUD and query operations per entity. Each module exposes plain async
//! functions over a `DatabaseConnection`, mapping failures to `ServiceError`.

pub mod users;
pub mod rooms;
pub mod bookings;
pub mod payments;
pub mod amenities;
pub mod booking_services;
pub mod discounts;
pub mod reviews;
pub mod statistics;

use common::pagination::Pagination;
use sea_orm::{
    sea_query::{Expr, Func, IntoColumnRef, SimpleExpr},
    DatabaseConnection, EntityTrait, PaginatorTrait, PrimaryKeyTrait, Select,
};

use crate::errors::ServiceError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

/// Runs `select`, fetching a single page when `page` is given and every row otherwise.
pub(crate) async fn fetch<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    page: Option<Pagination>,
) -> Result<Vec<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    match page {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            select.paginate(db, per_page).fetch_page(page_idx).await.map_err(db_err)
        }
        None => select.all(db).await.map_err(db_err),
    }
}

/// Fails with `Validation` when the referenced row is missing, so a bad
/// foreign key surfaces as a 400 rather than a constraint error.
pub(crate) async fn ensure_exists<E>(db: &DatabaseConnection, id: i32, entity: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    match E::find_by_id(id).one(db).await.map_err(db_err)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::Validation(format!("{} {} does not exist", entity, id))),
    }
}

/// Case-insensitive substring match: `LOWER(col) LIKE '%term%'`.
pub(crate) fn icontains<C: IntoColumnRef>(col: C, term: &str) -> SimpleExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", escaped))
}

#[cfg(test)]
mod tests {
    use super::icontains;
    use models::room;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn icontains_lowers_and_escapes() {
        let sql = room::Entity::find()
            .filter(icontains(room::Column::RoomType, "De_Luxe%"))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("room_type") LIKE"#), "{sql}");
        assert!(sql.contains("luxe"), "{sql}");
        assert!(!sql.contains("De"), "{sql}");
    }
}
