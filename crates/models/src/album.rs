use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, QuerySelect, Select, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{id, song, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub year: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Song => Entity::has_many(song::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client-submitted album fields prior to validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

/// Trimmed row shape returned by album listings.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    pub year: i32,
}

pub fn validate_payload(payload: &AlbumPayload) -> Result<(), ModelError> {
    validate::require_text("name", &payload.name)?;
    validate::validate_year(payload.year)
}

/// Listing projection: id, name and year only.
pub fn find_summaries() -> Select<Entity> {
    Entity::find()
        .select_only()
        .column(Column::Id)
        .column(Column::Name)
        .column(Column::Year)
}

pub async fn create(db: &DatabaseConnection, payload: &AlbumPayload) -> Result<Model, ModelError> {
    validate_payload(payload)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(id::generate(id::ALBUM_PREFIX)),
        name: Set(payload.name.clone()),
        year: Set(payload.year),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
