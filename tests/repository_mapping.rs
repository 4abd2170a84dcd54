mod common;

use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::application::services::ShorteningService;
use url_shortener::domain::errors::StoreError;
use url_shortener::domain::repositories::MappingRepository;
use url_shortener::infrastructure::persistence::PgMappingRepository;
use url_shortener::utils::db_error::is_undefined_table;

#[sqlx::test]
async fn test_save_new_mapping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let token = repo.save("abc123", "https://example.com").await.unwrap();

    assert_eq!(token, "abc123");
    assert_eq!(repo.get("abc123").await.unwrap(), "https://example.com");
}

#[sqlx::test]
async fn test_save_reuses_existing_url(pool: PgPool) {
    common::create_test_mapping(&pool, "abc123", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let token = repo.save("xyz789", "https://example.com").await.unwrap();

    assert_eq!(token, "abc123");
    assert_eq!(
        common::count_mappings_for_url(&pool, "https://example.com").await,
        1
    );
}

#[sqlx::test]
async fn test_save_token_collision(pool: PgPool) {
    common::create_test_mapping(&pool, "abc123", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo.save("abc123", "https://newexample.com").await;

    assert!(matches!(result, Err(StoreError::TokenCollision)));
}

#[sqlx::test]
async fn test_save_same_pair_twice(pool: PgPool) {
    common::create_test_mapping(&pool, "abc123", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let token = repo.save("abc123", "https://example.com").await.unwrap();

    assert_eq!(token, "abc123");
}

#[sqlx::test]
async fn test_get_not_found(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo.get("xyz789").await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    common::create_test_mapping(&pool, "xyz789", "https://unique-url.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo
        .find_by_original_url("https://unique-url.com")
        .await
        .unwrap();

    assert_eq!(mapping.unwrap().token, "xyz789");
    assert!(
        repo.find_by_original_url("https://missing.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_concurrent_creates_share_one_row(pool: PgPool) {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let service = Arc::new(ShorteningService::new(repo));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_short_link("https://race.example.com")
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut tokens = Vec::new();
    for handle in handles {
        tokens.push(handle.await.unwrap());
    }

    assert!(tokens.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        common::count_mappings_for_url(&pool, "https://race.example.com").await,
        1
    );
}

#[sqlx::test]
async fn test_pg_state_round_trip(pool: PgPool) {
    let state = common::create_pg_state(pool);

    let token = state
        .shortening_service
        .create_short_link("https://example.com")
        .await
        .unwrap();

    assert_eq!(state.shortening_service.backend(), "postgres");
    assert_eq!(
        state.shortening_service.resolve(&token).await.unwrap(),
        "https://example.com"
    );
}

#[sqlx::test]
async fn test_save_long_url_reuses_token(pool: PgPool) {
    let long_url = format!("https://example.com/track?q={}", "a".repeat(6400));
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let token = repo.save("long000001", &long_url).await.unwrap();
    let again = repo.save("long000002", &long_url).await.unwrap();

    assert_eq!(token, "long000001");
    assert_eq!(again, "long000001");
    assert_eq!(repo.get("long000001").await.unwrap(), long_url);
    assert_eq!(common::count_mappings_for_url(&pool, &long_url).await, 1);
}

#[sqlx::test]
async fn test_undefined_table_is_classified(pool: PgPool) {
    let missing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM no_such_table")
        .fetch_one(&pool)
        .await
        .unwrap_err();
    assert!(is_undefined_table(&missing));

    let present = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(&pool)
        .await;
    assert!(present.is_ok());
}
