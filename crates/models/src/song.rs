use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Condition, Expr};
use sea_orm::{
    entity::prelude::*, DatabaseConnection, FromQueryResult, QueryFilter, QuerySelect, Select, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{album, id, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Album,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Album => Entity::belongs_to(album::Entity)
                .from(Column::AlbumId)
                .to(album::Column::Id)
                .into(),
        }
    }
}

impl Related<album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client-submitted song fields prior to validation. `duration` and
/// `albumId` are optional; album existence is left to the FK constraint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<String>,
}

/// Trimmed row shape returned by song listings and album detail.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

pub fn validate_payload(payload: &SongPayload) -> Result<(), ModelError> {
    validate::require_text("title", &payload.title)?;
    validate::require_text("performer", &payload.performer)?;
    validate::require_text("genre", &payload.genre)?;
    validate::validate_year(payload.year)
}

/// Listing query with optional case-insensitive partial matches. Each
/// present filter adds one `ILIKE` condition; conditions are AND-combined
/// and every user value is a bound parameter, never spliced into the SQL.
pub fn find_filtered(title: Option<&str>, performer: Option<&str>) -> Select<Entity> {
    let mut cond = Condition::all();
    if let Some(t) = title {
        cond = cond.add(Expr::col(Column::Title).ilike(format!("%{}%", t)));
    }
    if let Some(p) = performer {
        cond = cond.add(Expr::col(Column::Performer).ilike(format!("%{}%", p)));
    }
    summary_select().filter(cond)
}

/// All songs referencing the given album; empty when none.
pub fn find_by_album(album_id: &str) -> Select<Entity> {
    summary_select().filter(Column::AlbumId.eq(album_id))
}

fn summary_select() -> Select<Entity> {
    Entity::find()
        .select_only()
        .column(Column::Id)
        .column(Column::Title)
        .column(Column::Performer)
}

pub async fn create(db: &DatabaseConnection, payload: &SongPayload) -> Result<Model, ModelError> {
    validate_payload(payload)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(id::generate(id::SONG_PREFIX)),
        title: Set(payload.title.clone()),
        year: Set(payload.year),
        performer: Set(payload.performer.clone()),
        genre: Set(payload.genre.clone()),
        duration: Set(payload.duration),
        album_id: Set(payload.album_id.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn no_filters_builds_no_where_clause(){
        let stmt = find_filtered(None, None).build(DbBackend::Postgres);
        assert!(!stmt.sql.contains("WHERE"));
        assert!(stmt.values.unwrap().0.is_empty());
    }

    #[test]
    fn single_filter_binds_one_parameter() {
        let stmt = find_filtered(Some("abc"), None).build(DbBackend::Postgres);
        assert!(stmt.sql.contains("ILIKE $1"));
        let values = stmt.values.unwrap().0;
        assert_eq!(values.len(), 1);
        assert_eq!(format!("{:?}", values[0]), format!("{:?}", sea_orm::Value::from("%abc%")));
    }

    #[test]
    fn combined_filters_bind_in_order() {
        let stmt = find_filtered(Some("life"), Some("coldplay")).build(DbBackend::Postgres);
        assert!(stmt.sql.contains("ILIKE $1"));
        assert!(stmt.sql.contains("AND"));
        assert!(stmt.sql.contains("ILIKE $2"));
        let values = stmt.values.unwrap().0;
        assert_eq!(values.len(), 2);
        assert_eq!(format!("{:?}", values[0]), format!("{:?}", sea_orm::Value::from("%life%")));
        assert_eq!(format!("{:?}", values[1]), format!("{:?}", sea_orm::Value::from("%coldplay%")));
    }

    #[test]
    fn malicious_input_stays_a_bound_value() {
        let needle = "x'; DROP TABLE songs; --";
        let stmt = find_filtered(None, Some(needle)).build(DbBackend::Postgres);
        assert!(!stmt.sql.contains("DROP TABLE"));
        let values = stmt.values.unwrap().0;
        assert_eq!(
            format!("{:?}", values[0]),
            format!("{:?}", sea_orm::Value::from(format!("%{}%", needle)))
        );
    }

    #[test]
    fn album_lookup_filters_on_album_id() {
        let stmt = find_by_album("album-abc").build(DbBackend::Postgres);
        assert!(stmt.sql.contains("album_id"));
        let values = stmt.values.unwrap().0;
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn payload_accepts_camel_case_album_id() {
        let p: SongPayload = serde_json::from_value(serde_json::json!({
            "title": "Yellow",
            "year": 2000,
            "performer": "Coldplay",
            "genre": "Alternative",
            "albumId": "album-abc"
        }))
        .unwrap();
        assert_eq!(p.album_id.as_deref(), Some("album-abc"));
        assert!(p.duration.is_none());
    }

    #[test]
    fn payload_validation_requires_text_fields() {
        let good = SongPayload {
            title: "Yellow".into(),
            year: 2000,
            performer: "Coldplay".into(),
            genre: "Alternative".into(),
            duration: None,
            album_id: None,
        };
        assert!(validate_payload(&good).is_ok());

        let mut bad = good.clone();
        bad.performer = "  ".into();
        assert!(validate_payload(&bad).is_err());

        let mut bad = good;
        bad.year = 1800;
        assert!(validate_payload(&bad).is_err());
    }
}
