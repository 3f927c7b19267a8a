use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use models::album::{self, AlbumPayload, AlbumSummary};

/// Create an album; returns the generated identifier.
pub async fn create_album(
    db: &DatabaseConnection,
    payload: &AlbumPayload,
) -> Result<String, ServiceError> {
    let created = album::create(db, payload).await?;
    Ok(created.id)
}

/// All albums, trimmed to id/name/year.
pub async fn get_albums(db: &DatabaseConnection) -> Result<Vec<AlbumSummary>, ServiceError> {
    album::find_summaries()
        .into_model::<AlbumSummary>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get album by id.
pub async fn get_album(db: &DatabaseConnection, id: &str) -> Result<album::Model, ServiceError> {
    album::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("album"))
}

/// Replace the album's mutable fields and refresh its update timestamp.
pub async fn edit_album(
    db: &DatabaseConnection,
    id: &str,
    payload: &AlbumPayload,
) -> Result<(), ServiceError> {
    album::validate_payload(payload)?;
    let mut am: album::ActiveModel = album::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("album"))?
        .into();
    am.name = Set(payload.name.clone());
    am.year = Set(payload.year);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Hard delete; NotFound when no row was removed.
pub async fn delete_album(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let res = album::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("album"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::id;

    fn payload(name: String, year: i32) -> AlbumPayload {
        AlbumPayload { name, year }
    }

    #[tokio::test]
    async fn album_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let name = format!("svc_album_{}", id::generate("t"));
        let album_id = create_album(&db, &payload(name.clone(), 2000)).await?;
        assert!(album_id.starts_with("album-"));

        let found = get_album(&db, &album_id).await?;
        assert_eq!(found.name, name);
        assert_eq!(found.year, 2000);

        let listed = get_albums(&db).await?;
        assert!(listed.iter().any(|a| a.id == album_id));

        edit_album(&db, &album_id, &payload("renamed".into(), 2010)).await?;
        let updated = get_album(&db, &album_id).await?;
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.year, 2010);
        assert!(updated.updated_at >= updated.created_at);

        delete_album(&db, &album_id).await?;
        let after = get_album(&db, &album_id).await;
        assert!(matches!(after, Err(ServiceError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn edit_missing_album_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let res = edit_album(&db, "album-missing0000000", &payload("x".into(), 2000)).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_album_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let res = delete_album(&db, "album-missing0000000").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_year_never_reaches_storage() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let before = get_albums(&db).await?.len();
        let res = create_album(&db, &payload("bad year".into(), 1899)).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        assert_eq!(get_albums(&db).await?.len(), before);
        Ok(())
    }
}
