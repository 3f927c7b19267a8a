use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Songs: index on album_id for the related-songs lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_songs_album")
                    .table(Songs::Table)
                    .col(Songs::AlbumId)
                    .to_owned(),
            )
            .await?;

        // Songs: index on performer, the most common list filter
        manager
            .create_index(
                Index::create()
                    .name("idx_songs_performer")
                    .table(Songs::Table)
                    .col(Songs::Performer)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_songs_album").table(Songs::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_songs_performer").table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Songs { Table, AlbumId, Performer }
