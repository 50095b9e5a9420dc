//! Create `game` table.
//!
//! One row per catalog entry; `price_paid` is a fixed-point currency amount.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(text(Game::Name).not_null())
                    .col(text(Game::Platform).not_null())
                    .col(text(Game::Genre).not_null())
                    .col(decimal_len(Game::PricePaid, 10, 2).not_null())
                    .to_owned(),
            )
            .await?;

        // Lookups filter on lower(platform) / lower(genre)
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_game_platform_lower ON game (lower(platform))",
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared("CREATE INDEX IF NOT EXISTS idx_game_genre_lower ON game (lower(genre))")
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Game::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Game { Table, Id, Name, Platform, Genre, PricePaid }
