use crate::game::{self, Column, GamePatch, NewGame};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use super::test_db;

fn new_game(name: &str, platform: &str, genre: &str, price: &str) -> NewGame {
    NewGame {
        name: name.to_string(),
        platform: platform.to_string(),
        genre: genre.to_string(),
        price_paid: Decimal::from_str(price).unwrap(),
    }
}

/// Test game CRUD operations
#[tokio::test]
async fn test_game_crud() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    // Create
    let input = new_game("Halo Infinite", "xbox", "tiro", "199.90");
    let created = game::create(&db, &input).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.price_paid, input.price_paid);

    // Read
    let found = game::find(&db, created.id).await?.expect("created game is readable");
    assert_eq!(found, created);
    assert!(game::list(&db).await?.iter().any(|g| g.id == created.id));

    // Update only the price
    let patch = GamePatch { price_paid: Some(Decimal::from_str("149.90")?), ..Default::default() };
    let updated = game::update(&db, found, &patch).await?;
    assert_eq!(updated.price_paid, Decimal::from_str("149.90")?);
    assert_eq!(updated.name, "Halo Infinite");
    assert_eq!(updated.platform, "xbox");

    // Empty patch is a no-op
    let same = game::update(&db, updated.clone(), &GamePatch::default()).await?;
    assert_eq!(same, updated);

    // Delete
    assert!(game::delete(&db, created.id).await?);
    assert!(game::find(&db, created.id).await?.is_none());
    assert!(!game::delete(&db, created.id).await?);

    Ok(())
}

/// Platform and genre lookups ignore case
#[tokio::test]
async fn test_case_insensitive_lookup() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    let platform = format!("Plat-{}", Uuid::new_v4());
    let genre = format!("Genre-{}", Uuid::new_v4());
    let a = game::create(&db, &new_game("Forza Horizon 5", &platform, &genre, "179.90")).await?;

    let by_platform = game::find_by_column_ci(&db, Column::Platform, &platform.to_lowercase()).await?;
    assert_eq!(by_platform.len(), 1);
    assert_eq!(by_platform[0].id, a.id);

    let by_genre = game::find_by_column_ci(&db, Column::Genre, &genre.to_uppercase()).await?;
    assert_eq!(by_genre.len(), 1);

    // exact match only, no prefix matching
    let prefix = game::find_by_column_ci(&db, Column::Platform, "plat-").await?;
    assert!(prefix.iter().all(|g| g.id != a.id));

    game::delete(&db, a.id).await?;
    Ok(())
}

/// Ids are never reused after delete
#[tokio::test]
async fn test_ids_not_reused() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    let first = game::create(&db, &new_game("God of War Ragnarok", "playstation", "acao", "249.90")).await?;
    game::delete(&db, first.id).await?;
    let second = game::create(&db, &new_game("God of War Ragnarok", "playstation", "acao", "249.90")).await?;
    assert!(second.id > first.id);

    game::delete(&db, second.id).await?;
    Ok(())
}

/// Text columns carry no length cap
#[tokio::test]
async fn test_long_text_fields_round_trip() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    let name = "x".repeat(300);
    let platform = format!("{}-{}", "p".repeat(65), Uuid::new_v4());
    let genre = "g".repeat(120);
    let created = game::create(&db, &new_game(&name, &platform, &genre, "10.00")).await?;
    let found = game::find(&db, created.id).await?.expect("long game is readable");
    assert_eq!(found.name.len(), 300);
    assert_eq!(found.platform, platform);
    assert_eq!(found.genre, genre);

    game::delete(&db, created.id).await?;
    Ok(())
}
