use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::payment;
use service::db::payments::{self, CreatePayment, PaymentFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<PaymentFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<payment::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(payments::list_payments(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreatePayment>, JsonRejection>,
) -> Result<(StatusCode, Json<payment::Model>), JsonApiError> {
    let created = payments::create_payment(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<payment::Model>, JsonApiError> {
    Ok(Json(payments::get_payment(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    payments::delete_payment(&state.db, id).await?;
    info!(payment_id = id, "payment_deleted");
    Ok(StatusCode::NO_CONTENT)
}
