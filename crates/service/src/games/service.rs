use std::sync::Arc;

use models::game;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::games::domain::{CreateGameInput, UpdateGameInput};
use crate::games::repository::GameRepository;

/// Catalog business service independent of web framework.
#[derive(Clone)]
pub struct GameService {
    repo: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repo: Arc<dyn GameRepository>) -> Self { Self { repo } }

    /// Validate and insert a new game.
    ///
    /// # Examples
    /// ```
    /// use service::games::{CreateGameInput, GameService, repository::mock::InMemoryGameRepository};
    /// use std::sync::Arc;
    /// let svc = GameService::new(Arc::new(InMemoryGameRepository::new()));
    /// let input = CreateGameInput {
    ///     name: Some("Halo Infinite".into()),
    ///     platform: Some("xbox".into()),
    ///     genre: Some("tiro".into()),
    ///     price_paid: Some(serde_json::json!(199.90)),
    /// };
    /// let game = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(game.id, 1);
    /// assert_eq!(game.price_paid.to_string(), "199.90");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateGameInput) -> Result<game::Model, ServiceError> {
        let new_game = input.validate()?;
        let created = self.repo.create(new_game).await?;
        info!(id = created.id, platform = %created.platform, genre = %created.genre, "game_created");
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<game::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<game::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::game_not_found(id))
    }

    pub async fn find_by_platform(&self, platform: &str) -> Result<Vec<game::Model>, ServiceError> {
        self.repo.find_by_platform(platform).await
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<game::Model>, ServiceError> {
        self.repo.find_by_genre(genre).await
    }

    /// Apply the supplied fields to an existing game.
    ///
    /// The payload is checked before the lookup, so an invalid field on a
    /// missing id reports the validation error.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateGameInput) -> Result<game::Model, ServiceError> {
        let patch = input.validate()?;
        let existing = self.find_by_id(id).await?;
        let updated = self.repo.update(existing, patch).await?;
        info!(id, "game_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::game_not_found(id));
        }
        info!(id, "game_deleted");
        Ok(())
    }

    /// Remove every record; used by seeding.
    pub async fn clear(&self) -> Result<u64, ServiceError> {
        let removed = self.repo.delete_all().await?;
        info!(removed, "catalog_cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::repository::mock::InMemoryGameRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn setup() -> (Arc<InMemoryGameRepository>, GameService) {
        let repo = Arc::new(InMemoryGameRepository::new());
        let svc = GameService::new(repo.clone());
        (repo, svc)
    }

    fn input(name: &str, platform: &str, genre: &str, price: f64) -> CreateGameInput {
        CreateGameInput {
            name: Some(name.into()),
            platform: Some(platform.into()),
            genre: Some(genre.into()),
            price_paid: Some(price.into()),
        }
    }

    #[tokio::test]
    async fn created_record_reads_back_exactly() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let created = svc.create(input("Zelda: Breath of the Wild", "nintendo", "aventura", 299.90)).await?;
        let found = svc.find_by_id(created.id).await?;
        assert_eq!(found.name, "Zelda: Breath of the Wild");
        assert_eq!(found.platform, "nintendo");
        assert_eq!(found.genre, "aventura");
        assert_eq!(found.price_paid, Decimal::from_str("299.90")?);
        Ok(())
    }

    #[tokio::test]
    async fn negative_price_rejected_zero_accepted() -> anyhow::Result<()> {
        let (repo, svc) = setup();
        let err = svc.create(input("Free Game", "xbox", "tiro", -0.5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.is_empty().await);

        let free = svc.create(input("Free Game", "xbox", "tiro", 0.0)).await?;
        assert!(free.price_paid.is_zero());
        Ok(())
    }

    #[tokio::test]
    async fn platform_and_genre_lookups_ignore_case() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let halo = svc.create(input("Halo Infinite", "Xbox", "Tiro", 199.90)).await?;
        svc.create(input("God of War Ragnarok", "playstation", "acao", 249.90)).await?;

        let xbox = svc.find_by_platform("xbox").await?;
        assert_eq!(xbox.len(), 1);
        assert_eq!(xbox[0].id, halo.id);

        let tiro = svc.find_by_genre("TIRO").await?;
        assert_eq!(tiro.len(), 1);

        assert!(svc.find_by_platform("nintendo").await?.is_empty());
        assert!(svc.find_by_genre("tir").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn updating_price_leaves_other_fields() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let g = svc.create(input("Forza Horizon 5", "xbox", "corrida", 179.90)).await?;
        let updated = svc.update(g.id, UpdateGameInput { price_paid: Some(serde_json::json!(89.95)), ..Default::default() }).await?;
        assert_eq!(updated.name, g.name);
        assert_eq!(updated.platform, g.platform);
        assert_eq!(updated.genre, g.genre);
        assert_eq!(updated.price_paid, Decimal::from_str("89.95")?);
        assert_eq!(svc.find_by_id(g.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn empty_update_returns_current_record() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let g = svc.create(input("Halo Infinite", "xbox", "tiro", 199.90)).await?;
        let same = svc.update(g.id, UpdateGameInput::default()).await?;
        assert_eq!(same, g);
        Ok(())
    }

    #[tokio::test]
    async fn deleted_record_is_not_found() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let g = svc.create(input("Halo Infinite", "xbox", "tiro", 199.90)).await?;
        svc.delete(g.id).await?;
        let err = svc.find_by_id(g.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("game with id {} not found", g.id));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_on_missing_id_do_not_mutate() -> anyhow::Result<()> {
        let (repo, svc) = setup();
        let g = svc.create(input("Halo Infinite", "xbox", "tiro", 199.90)).await?;

        let err = svc.update(999, UpdateGameInput { name: Some("Other".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = svc.update(999, UpdateGameInput { price_paid: Some(serde_json::json!(-1.0)), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.delete(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert_eq!(repo.len().await, 1);
        assert_eq!(svc.find_by_id(g.id).await?, g);
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused() -> anyhow::Result<()> {
        let (_, svc) = setup();
        let a = svc.create(input("A", "xbox", "tiro", 1.0)).await?;
        svc.delete(a.id).await?;
        let b = svc.create(input("B", "xbox", "tiro", 1.0)).await?;
        assert!(b.id > a.id);
        Ok(())
    }

    #[tokio::test]
    async fn storage_failures_surface_as_db_errors() {
        let (repo, svc) = setup();
        repo.set_unavailable(true);
        assert!(matches!(svc.list_all().await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.find_by_id(1).await, Err(ServiceError::Db(_))));
    }
}
