//! Read-through cache with a fixed time-to-live.
//!
//! Entries are keyed by query kind and city. A read inside the TTL window
//! returns the stored value; every write opens a new window. Concurrent
//! misses for the same key are not coalesced, so each may reach the provider
//! and the last write wins.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

use crate::models::WeatherReport;

/// Source of "now" for expiry checks.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed_nanos: AtomicU64,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_nanos: AtomicU64::new(0),
        }
    }

    /// Moves the clock forward, stopping at the latest representable instant.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let moved = self
            .elapsed_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |elapsed| {
                let target = elapsed.saturating_add(nanos);
                self.origin
                    .checked_add(Duration::from_nanos(target))
                    .map(|_| target)
            });
        if moved.is_err() {
            tracing::debug!("manual clock held at its latest instant");
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let elapsed = Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst));
        self.origin.checked_add(elapsed).unwrap_or(self.origin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Current,
    Today,
    Week,
}

impl QueryKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Today => "today",
            Self::Week => "week",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: QueryKind,
    city: String,
}

impl CacheKey {
    pub fn new(kind: QueryKind, city: impl Into<String>) -> Self {
        Self {
            kind,
            city: city.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weather_{}_{}", self.kind.as_str(), self.city)
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    /// `None` when the TTL reaches past the latest representable instant.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

#[derive(Debug)]
pub struct TtlCache<V> {
    entries: RwLock<HashMap<CacheKey, Entry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Returns the value stored under `key` if it has not expired.
    pub async fn get(&self, key: &CacheKey) -> Option<V> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` with a fresh TTL and drops entries that have expired.
    pub async fn insert(&self, key: CacheKey, value: V) {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(
            key,
            Entry {
                value,
                expires_at: now.checked_add(self.ttl),
            },
        );
    }

    /// Returns the live value for `key`, or runs `fetch` and stores its
    /// success. Errors are passed through and leave the cache untouched.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: CacheKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::debug!(key = %key, "cache hit");
            return Ok(value);
        }

        tracing::debug!(key = %key, "cache miss");
        let value = fetch().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// The caches backing [`crate::service::WeatherService`], sharing one TTL and clock.
#[derive(Debug)]
pub struct WeatherCache {
    pub reports: TtlCache<WeatherReport>,
    pub forecasts: TtlCache<Value>,
}

impl WeatherCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            reports: TtlCache::new(ttl, Arc::clone(&clock)),
            forecasts: TtlCache::new(ttl, clock),
        }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }
}
