use sea_orm::DatabaseConnection;

use models::game::{self, GamePatch, NewGame};

use crate::errors::ServiceError;
use crate::games::repository::GameRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmGameRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmGameRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl GameRepository for SeaOrmGameRepository {
    async fn list(&self) -> Result<Vec<game::Model>, ServiceError> {
        Ok(game::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<game::Model>, ServiceError> {
        Ok(game::find(&self.db, id).await?)
    }

    async fn find_by_platform(&self, platform: &str) -> Result<Vec<game::Model>, ServiceError> {
        Ok(game::find_by_column_ci(&self.db, game::Column::Platform, platform).await?)
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<game::Model>, ServiceError> {
        Ok(game::find_by_column_ci(&self.db, game::Column::Genre, genre).await?)
    }

    async fn create(&self, input: NewGame) -> Result<game::Model, ServiceError> {
        Ok(game::create(&self.db, &input).await?)
    }

    async fn update(&self, existing: game::Model, patch: GamePatch) -> Result<game::Model, ServiceError> {
        let id = existing.id;
        game::update(&self.db, existing, &patch).await.map_err(|e| match ServiceError::from(e) {
            ServiceError::NotFound(_) => ServiceError::game_not_found(id),
            other => other,
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(game::delete(&self.db, id).await?)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        Ok(game::delete_all(&self.db).await?)
    }
}
