#![allow(dead_code)]

use async_trait::async_trait;
use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url_shortener::domain::errors::StoreError;
use url_shortener::domain::repositories::MappingRepository;
use url_shortener::infrastructure::persistence::{MemoryMappingRepository, PgMappingRepository};
use url_shortener::state::AppState;

pub const TOKEN_PATTERN: &str = "^[a-zA-Z0-9_]{10}$";

pub fn create_memory_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repository = Arc::new(MemoryMappingRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgMappingRepository::new(Arc::new(pool))))
}

pub async fn create_test_mapping(pool: &PgPool, token: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_url, original_url) VALUES ($1, $2)")
        .bind(token)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings_for_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE original_url = $1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Repository whose every operation fails as if the backend were down.
pub struct FailingRepository;

#[async_trait]
impl MappingRepository for FailingRepository {
    async fn save(&self, _token: &str, _original_url: &str) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _token: &str) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// Memory repository that reports a collision for the first `collisions` saves.
pub struct CollidingRepository {
    remaining: AtomicUsize,
    pub attempts: AtomicUsize,
    pub inner: MemoryMappingRepository,
}

impl CollidingRepository {
    pub fn new(collisions: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(collisions),
            attempts: AtomicUsize::new(0),
            inner: MemoryMappingRepository::new(),
        }
    }
}

#[async_trait]
impl MappingRepository for CollidingRepository {
    async fn save(&self, token: &str, original_url: &str) -> Result<String, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let forced = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if forced {
            return Err(StoreError::TokenCollision);
        }

        self.inner.save(token, original_url).await
    }

    async fn get(&self, token: &str) -> Result<String, StoreError> {
        self.inner.get(token).await
    }

    fn backend(&self) -> &'static str {
        "colliding"
    }
}

/// Recorder that keeps counter totals by name, for installing with
/// `metrics::set_default_local_recorder` in single-threaded tests.
#[derive(Default)]
pub struct CountingRecorder {
    counters: Mutex<HashMap<String, Arc<AtomicU64>>>,
}

impl CountingRecorder {
    pub fn counter_value(&self, name: &str) -> u64 {
        self.counters
            .lock()
            .unwrap()
            .get(name)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }
}

impl Recorder for CountingRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let counter = self
            .counters
            .lock()
            .unwrap()
            .entry(key.name().to_string())
            .or_default()
            .clone();
        Counter::from_arc(counter)
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}
