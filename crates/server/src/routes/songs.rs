use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use common::types::ResponseBody;
use models::song::SongPayload;
use service::songs_service;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
    pub performer: Option<String>,
}

/// `POST /songs` — validate, insert, 201 with the generated id.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SongPayload>,
) -> Result<(StatusCode, Json<ResponseBody>), ApiError> {
    let song_id = songs_service::create_song(&state.db, &payload).await?;
    info!(id = %song_id, "song created");
    Ok((
        StatusCode::CREATED,
        Json(
            ResponseBody::success()
                .message("Song added")
                .data(json!({ "songId": song_id })),
        ),
    ))
}

/// `GET /songs?title=&performer=` — optional partial-match filters.
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<ResponseBody>, ApiError> {
    let songs =
        songs_service::list_songs(&state.db, q.title.as_deref(), q.performer.as_deref()).await?;
    Ok(Json(ResponseBody::success().data(json!({ "songs": songs }))))
}

/// `GET /songs/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseBody>, ApiError> {
    let song = songs_service::get_song(&state.db, &id).await?;
    Ok(Json(ResponseBody::success().data(json!({ "song": song }))))
}

/// `PUT /songs/:id` — full replace of the mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SongPayload>,
) -> Result<Json<ResponseBody>, ApiError> {
    songs_service::edit_song(&state.db, &id, &payload).await?;
    info!(id = %id, "song updated");
    Ok(Json(ResponseBody::success().message("Song updated")))
}

/// `DELETE /songs/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseBody>, ApiError> {
    songs_service::delete_song(&state.db, &id).await?;
    info!(id = %id, "song deleted");
    Ok(Json(ResponseBody::success().message("Song deleted")))
}
