use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tracing::info;

use common::types::ResponseBody;
use models::album::AlbumPayload;
use service::{albums_service, songs_service};

use crate::errors::ApiError;
use crate::routes::AppState;

/// `POST /albums` — validate, insert, 201 with the generated id.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AlbumPayload>,
) -> Result<(StatusCode, Json<ResponseBody>), ApiError> {
    let album_id = albums_service::create_album(&state.db, &payload).await?;
    info!(id = %album_id, "album created");
    Ok((
        StatusCode::CREATED,
        Json(
            ResponseBody::success()
                .message("Album added")
                .data(json!({ "albumId": album_id })),
        ),
    ))
}

/// `GET /albums`
pub async fn list(State(state): State<AppState>) -> Result<Json<ResponseBody>, ApiError> {
    let albums = albums_service::get_albums(&state.db).await?;
    Ok(Json(ResponseBody::success().data(json!({ "albums": albums }))))
}

/// `GET /albums/:id` — the album with its related songs attached.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseBody>, ApiError> {
    let album = albums_service::get_album(&state.db, &id).await?;
    let songs = songs_service::get_songs_by_album(&state.db, &id).await?;

    let mut album = serde_json::to_value(&album)
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    album["songs"] = json!(songs);
    Ok(Json(ResponseBody::success().data(json!({ "album": album }))))
}

/// `PUT /albums/:id` — full replace of the mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AlbumPayload>,
) -> Result<Json<ResponseBody>, ApiError> {
    albums_service::edit_album(&state.db, &id, &payload).await?;
    info!(id = %id, "album updated");
    Ok(Json(ResponseBody::success().message("Album updated")))
}

/// `DELETE /albums/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResponseBody>, ApiError> {
    albums_service::delete_album(&state.db, &id).await?;
    info!(id = %id, "album deleted");
    Ok(Json(ResponseBody::success().message("Album deleted")))
}
