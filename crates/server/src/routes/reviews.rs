use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::review;
use service::db::reviews::{self, CreateReview, ReviewFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<ReviewFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<review::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(reviews::list_reviews(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateReview>, JsonRejection>,
) -> Result<(StatusCode, Json<review::Model>), JsonApiError> {
    let created = reviews::create_review(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<review::Model>, JsonApiError> {
    Ok(Json(reviews::get_review(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    reviews::delete_review(&state.db, id).await?;
    info!(review_id = id, "review_deleted");
    Ok(StatusCode::NO_CONTENT)
}
