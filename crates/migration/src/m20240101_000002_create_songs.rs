//! Create `songs` table with an optional FK to `albums`.
//!
//! `album_id` is nullable; deleting an album detaches its songs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(string_len(Songs::Id, 64).primary_key())
                    .col(string_len(Songs::Title, 255).not_null())
                    .col(integer(Songs::Year).not_null())
                    .col(string_len(Songs::Performer, 255).not_null())
                    .col(string_len(Songs::Genre, 128).not_null())
                    .col(
                        ColumnDef::new(Songs::Duration)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Songs::AlbumId)
                            .string_len(64)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Songs::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Songs::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_album")
                            .from(Songs::Table, Songs::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Songs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Songs { Table, Id, Title, Year, Performer, Genre, Duration, AlbumId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Albums { Table, Id }
