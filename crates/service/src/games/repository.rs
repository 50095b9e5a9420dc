use async_trait::async_trait;
use models::game::{self, GamePatch, NewGame};

use crate::errors::ServiceError;

/// Persistence seam for the catalog.
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<game::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<game::Model>, ServiceError>;
    /// Case-insensitive exact match.
    async fn find_by_platform(&self, platform: &str) -> Result<Vec<game::Model>, ServiceError>;
    /// Case-insensitive exact match.
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<game::Model>, ServiceError>;
    async fn create(&self, input: NewGame) -> Result<game::Model, ServiceError>;
    async fn update(&self, existing: game::Model, patch: GamePatch) -> Result<game::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct State {
        last_id: i32,
        rows: BTreeMap<i32, game::Model>,
    }

    /// Ids come from a counter that only grows, so deleted ids are never handed out again.
    #[derive(Default)]
    pub struct InMemoryGameRepository {
        state: RwLock<State>,
        unavailable: AtomicBool,
    }

    impl InMemoryGameRepository {
        pub fn new() -> Self { Self::default() }

        /// Simulate a storage outage: every call fails with `ServiceError::Db`.
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        pub async fn len(&self) -> usize {
            self.state.read().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("storage unavailable".into()));
            }
            Ok(())
        }

        async fn filter<F>(&self, pred: F) -> Result<Vec<game::Model>, ServiceError>
        where
            F: Fn(&game::Model) -> bool + Send,
        {
            self.check()?;
            let state = self.state.read().await;
            Ok(state.rows.values().filter(|g| pred(g)).cloned().collect())
        }
    }

    #[async_trait]
    impl GameRepository for InMemoryGameRepository {
        async fn list(&self) -> Result<Vec<game::Model>, ServiceError> {
            self.filter(|_| true).await
        }

        async fn get(&self, id: i32) -> Result<Option<game::Model>, ServiceError> {
            self.check()?;
            Ok(self.state.read().await.rows.get(&id).cloned())
        }

        async fn find_by_platform(&self, platform: &str) -> Result<Vec<game::Model>, ServiceError> {
            let wanted = platform.to_lowercase();
            self.filter(move |g| g.platform.to_lowercase() == wanted).await
        }

        async fn find_by_genre(&self, genre: &str) -> Result<Vec<game::Model>, ServiceError> {
            let wanted = genre.to_lowercase();
            self.filter(move |g| g.genre.to_lowercase() == wanted).await
        }

        async fn create(&self, input: NewGame) -> Result<game::Model, ServiceError> {
            self.check()?;
            let mut state = self.state.write().await;
            state.last_id += 1;
            let row = game::Model {
                id: state.last_id,
                name: input.name,
                platform: input.platform,
                genre: input.genre,
                price_paid: input.price_paid,
            };
            state.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn update(&self, existing: game::Model, patch: GamePatch) -> Result<game::Model, ServiceError> {
            self.check()?;
            let mut state = self.state.write().await;
            let row = state
                .rows
                .get_mut(&existing.id)
                .ok_or_else(|| ServiceError::game_not_found(existing.id))?;
            patch.apply_to(row);
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.state.write().await.rows.remove(&id).is_some())
        }

        async fn delete_all(&self) -> Result<u64, ServiceError> {
            self.check()?;
            let mut state = self.state.write().await;
            let n = state.rows.len() as u64;
            state.rows.clear();
            Ok(n)
        }
    }
}
