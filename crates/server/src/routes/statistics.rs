use axum::{extract::{rejection::QueryRejection, Query, State}, Json};
use models::room;
use service::db::{rooms::{self, RoomSearch}, statistics::{self as stats, Statistics}};

use super::query;
use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/statistics", tag = "aggregates", responses((status = 200, description = "Totals and averages", body = crate::openapi::StatisticsDoc)))]
pub async fn statistics(State(state): State<ServerState>) -> Result<Json<Statistics>, JsonApiError> {
    Ok(Json(stats::collect(&state.db).await?))
}

#[utoipa::path(
    get, path = "/filter/rooms", tag = "aggregates",
    params(
        ("min_price" = Option<String>, Query, description = "Lower price bound, inclusive"),
        ("max_price" = Option<String>, Query, description = "Upper price bound, inclusive"),
        ("search_term" = Option<String>, Query, description = "Substring of room number or type, any case")
    ),
    responses((status = 200, description = "Matching rooms"), (status = 400, description = "Unparseable bound", body = crate::openapi::ErrorDoc))
)]
pub async fn filter_rooms(
    State(state): State<ServerState>,
    q: Result<Query<RoomSearch>, QueryRejection>,
) -> Result<Json<Vec<room::Model>>, JsonApiError> {
    let search = query(q)?;
    Ok(Json(rooms::filter_rooms(&state.db, &search).await?))
}
