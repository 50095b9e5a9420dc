//! Reference data for a fresh catalog.

use models::game;
use tracing::info;

use crate::errors::ServiceError;
use crate::games::{CreateGameInput, GameService};

/// (name, platform, genre, price paid)
pub const REFERENCE_GAMES: [(&str, &str, &str, f64); 5] = [
    ("The Last of Us Part II", "playstation", "aventura", 199.90),
    ("God of War Ragnarok", "playstation", "acao", 249.90),
    ("Halo Infinite", "xbox", "tiro", 199.90),
    ("Forza Horizon 5", "xbox", "corrida", 179.90),
    ("Zelda: Breath of the Wild", "nintendo", "aventura", 299.90),
];

/// Replace the catalog contents with [`REFERENCE_GAMES`].
pub async fn seed_catalog(svc: &GameService) -> Result<Vec<game::Model>, ServiceError> {
    svc.clear().await?;
    let mut inserted = Vec::with_capacity(REFERENCE_GAMES.len());
    for (name, platform, genre, price) in REFERENCE_GAMES {
        let created = svc
            .create(CreateGameInput {
                name: Some(name.into()),
                platform: Some(platform.into()),
                genre: Some(genre.into()),
                price_paid: Some(price.into()),
            })
            .await?;
        inserted.push(created);
    }
    info!(count = inserted.len(), "catalog_seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::repository::mock::InMemoryGameRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn seeding_replaces_existing_rows() -> anyhow::Result<()> {
        let repo = Arc::new(InMemoryGameRepository::new());
        let svc = GameService::new(repo.clone());

        seed_catalog(&svc).await?;
        let again = seed_catalog(&svc).await?;
        assert_eq!(again.len(), 5);
        assert_eq!(repo.len().await, 5);

        let playstation = svc.find_by_platform("PlayStation").await?;
        assert_eq!(playstation.len(), 2);
        let aventura = svc.find_by_genre("aventura").await?;
        assert_eq!(aventura.len(), 2);
        Ok(())
    }
}
