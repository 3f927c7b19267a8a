use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use models::song::{self, SongPayload, SongSummary};

/// Create a song; returns the generated identifier.
pub async fn create_song(
    db: &DatabaseConnection,
    payload: &SongPayload,
) -> Result<String, ServiceError> {
    let created = song::create(db, payload).await?;
    Ok(created.id)
}

/// List songs, optionally narrowed by case-insensitive partial matches on
/// title and/or performer. Absent filters contribute nothing.
pub async fn list_songs(
    db: &DatabaseConnection,
    title: Option<&str>,
    performer: Option<&str>,
) -> Result<Vec<SongSummary>, ServiceError> {
    song::find_filtered(title, performer)
        .into_model::<SongSummary>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get song by id.
pub async fn get_song(db: &DatabaseConnection, id: &str) -> Result<song::Model, ServiceError> {
    song::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("song"))
}

/// Songs referencing the given album; empty when none (not an error).
pub async fn get_songs_by_album(
    db: &DatabaseConnection,
    album_id: &str,
) -> Result<Vec<SongSummary>, ServiceError> {
    song::find_by_album(album_id)
        .into_model::<SongSummary>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace the song's mutable fields and refresh its update timestamp.
pub async fn edit_song(
    db: &DatabaseConnection,
    id: &str,
    payload: &SongPayload,
) -> Result<(), ServiceError> {
    song::validate_payload(payload)?;
    let mut am: song::ActiveModel = song::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("song"))?
        .into();
    am.title = Set(payload.title.clone());
    am.year = Set(payload.year);
    am.performer = Set(payload.performer.clone());
    am.genre = Set(payload.genre.clone());
    am.duration = Set(payload.duration);
    am.album_id = Set(payload.album_id.clone());
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Hard delete; NotFound when no row was removed.
pub async fn delete_song(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = song::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("song"));
    }
    Ok(())
}
