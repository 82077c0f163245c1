//! `/rooms` plus the legacy `POST /room` create path.
use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::room;
use service::db::rooms::{self, CreateRoom, RoomFilter};
use tracing::info;

use super::{body, query, PageParams};
use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
    filter: Result<Query<RoomFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<room::Model>>, JsonApiError> {
    let filter = query(filter)?;
    let page = query(page)?;
    Ok(Json(rooms::list_rooms(&state.db, &filter, page.pagination()).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateRoom>, JsonRejection>,
) -> Result<(StatusCode, Json<room::Model>), JsonApiError> {
    let created = rooms::create_room(&state.db, body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<room::Model>, JsonApiError> {
    Ok(Json(rooms::get_room(&state.db, id).await?))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    rooms::delete_room(&state.db, id).await?;
    info!(room_id = id, "room_deleted");
    Ok(StatusCode::NO_CONTENT)
}
