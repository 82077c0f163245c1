//! `/discounts`: discounts are returned with their services nested, and a
//! create may carry new or existing services to link.
use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use service::db::discounts::{self, CreateDiscount, DiscountFilter, DiscountWithServices};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<DiscountFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<DiscountWithServices>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(discounts::list_discounts(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateDiscount>, JsonRejection>,
) -> Result<(StatusCode, Json<DiscountWithServices>), JsonApiError> {
    let created = discounts::create_discount(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<DiscountWithServices>, JsonApiError> {
    Ok(Json(discounts::get_discount(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    discounts::delete_discount(&state.db, id).await?;
    info!(discount_id = id, "discount_deleted");
    Ok(StatusCode::NO_CONTENT)
}
