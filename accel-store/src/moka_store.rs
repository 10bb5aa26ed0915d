use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use moka::future::Cache;
use quotebench::domain::{CacheRead, CacheReadInfo, CacheStrategy, Quote};
use quotebench::ports::QuoteStore;
use shared::{Error, Result};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

/// Moka-based in-memory stand-in for the managed cache-aware record store.
/// Records live in a table, reads go through a tagged cache with a per-read
/// TTL, and invalidation evicts by tag behind a minimum-interval rate
/// limiter, so the latency demo runs end-to-end without the real service.
pub struct MokaQuoteStore {
    records: DashMap<i64, Quote>,
    next_id: AtomicI64,
    cache: Cache<i64, CachedEntry>,
    /// tag -> ids whose cached reads were filed under it
    tags: DashMap<String, HashSet<i64>>,
    min_invalidate_interval: Duration,
    last_invalidate: Mutex<Option<Instant>>,
}

#[derive(Clone, Debug)]
struct CachedEntry {
    quote: Quote,
    stored_at: Instant,
    ttl: Duration,
}

impl CachedEntry {
    fn is_fresh(&self) -> bool {
        self.stored_at.elapsed() < self.ttl
    }
}

impl MokaQuoteStore {
    /// Create a store that rejects invalidation calls arriving less than
    /// `min_invalidate_interval` apart. A zero interval disables the limiter.
    pub fn new(min_invalidate_interval: Duration) -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(0),
            cache: Cache::builder().build(),
            tags: DashMap::new(),
            min_invalidate_interval,
            last_invalidate: Mutex::new(None),
        }
    }
}

#[async_trait]
impl QuoteStore for MokaQuoteStore {
    async fn create(&self, quote: String) -> Result<Quote> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = Quote::new(id, quote);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: i64, strategy: &CacheStrategy) -> Result<CacheRead<Quote>> {
        if let Some(entry) = self.cache.get(&id).await {
            if entry.is_fresh() {
                return Ok(CacheRead::new(Some(entry.quote), CacheReadInfo::hit()));
            }
            // TTL expired; drop the entry and fall through to the table
            self.cache.invalidate(&id).await;
        }

        let Some(record) = self.records.get(&id).map(|r| r.value().clone()) else {
            return Ok(CacheRead::new(None, CacheReadInfo::miss()));
        };

        self.cache
            .insert(
                id,
                CachedEntry {
                    quote: record.clone(),
                    stored_at: Instant::now(),
                    ttl: strategy.ttl.as_duration(),
                },
            )
            .await;
        for tag in &strategy.tags {
            self.tags.entry(tag.clone()).or_default().insert(id);
        }

        Ok(CacheRead::new(Some(record), CacheReadInfo::miss()))
    }

    async fn update(&self, id: i64, quote: String) -> Result<Quote> {
        // The cache is deliberately left untouched: cached reads stay stale
        // until TTL expiry or tag invalidation.
        let mut record = self.records.get_mut(&id).ok_or(Error::QuoteNotFound(id))?;
        record.quote = quote;
        record.updated_at = Utc::now();
        Ok(record.value().clone())
    }

    async fn invalidate(&self, tags: &[String]) -> Result<()> {
        {
            let mut last = self
                .last_invalidate
                .lock()
                .map_err(|_| Error::Internal("invalidation clock lock poisoned".to_string()))?;
            if let Some(at) = *last {
                if at.elapsed() < self.min_invalidate_interval {
                    return Err(Error::RateLimited);
                }
            }
            *last = Some(Instant::now());
        }

        for tag in tags {
            let Some((_, ids)) = self.tags.remove(tag) else {
                continue;
            };
            for id in ids {
                self.cache.invalidate(&id).await;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for MokaQuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaQuoteStore")
            .field("records", &self.records.len())
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebench::ops::QUOTE_TAG;
    use shared::TtlMs;
    use tokio::time::sleep;

    fn strategy(ttl_ms: u64) -> CacheStrategy {
        CacheStrategy::new(TtlMs(ttl_ms), vec![QUOTE_TAG.to_string()])
    }

    fn store() -> MokaQuoteStore {
        MokaQuoteStore::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn create_then_get_is_a_miss_then_a_hit() {
        let store = store();
        let created = store.create("first quote".to_string()).await.unwrap();

        let first = store.get(created.id, &strategy(60_000)).await.unwrap();
        assert_eq!(first.info.status, quotebench::domain::CacheStatus::Miss);
        assert_eq!(first.data.unwrap().quote, "first quote");

        let second = store.get(created.id, &strategy(60_000)).await.unwrap();
        assert_eq!(second.info.status, quotebench::domain::CacheStatus::Hit);
        assert_eq!(second.data.unwrap().quote, "first quote");
    }

    #[tokio::test]
    async fn missing_ids_are_empty_reads() {
        let store = store();
        for id in [0, -7, 12345] {
            let read = store.get(id, &strategy(60_000)).await.unwrap();
            assert!(read.data.is_none(), "id {} should be an empty read", id);
        }
    }

    #[tokio::test]
    async fn cached_read_stays_stale_until_invalidated() {
        let store = store();
        let created = store.create("old".to_string()).await.unwrap();
        store.get(created.id, &strategy(60_000)).await.unwrap();

        store.update(created.id, "new".to_string()).await.unwrap();

        // Still served from cache with the pre-update text
        let stale = store.get(created.id, &strategy(60_000)).await.unwrap();
        assert_eq!(stale.info.status, quotebench::domain::CacheStatus::Hit);
        assert_eq!(stale.data.unwrap().quote, "old");

        store.invalidate(&[QUOTE_TAG.to_string()]).await.unwrap();

        let fresh = store.get(created.id, &strategy(60_000)).await.unwrap();
        assert_eq!(fresh.info.status, quotebench::domain::CacheStatus::Miss);
        assert_eq!(fresh.data.unwrap().quote, "new");
    }

    #[tokio::test]
    async fn ttl_expiry_refreshes_the_read() {
        let store = store();
        let created = store.create("old".to_string()).await.unwrap();
        store.get(created.id, &strategy(50)).await.unwrap();
        store.update(created.id, "new".to_string()).await.unwrap();

        sleep(Duration::from_millis(80)).await;

        let read = store.get(created.id, &strategy(50)).await.unwrap();
        assert_eq!(read.info.status, quotebench::domain::CacheStatus::Miss);
        assert_eq!(read.data.unwrap().quote, "new");
    }

    #[tokio::test]
    async fn rapid_invalidations_hit_the_rate_limit() {
        let store = MokaQuoteStore::new(Duration::from_secs(60));

        store.invalidate(&[QUOTE_TAG.to_string()]).await.unwrap();
        let second = store.invalidate(&[QUOTE_TAG.to_string()]).await;
        assert!(matches!(second.unwrap_err(), Error::RateLimited));
    }

    #[tokio::test]
    async fn zero_interval_disables_the_rate_limit() {
        let store = store();
        for _ in 0..3 {
            store.invalidate(&[QUOTE_TAG.to_string()]).await.unwrap();
        }
    }

    #[tokio::test]
    async fn invalidating_an_unknown_tag_is_a_no_op() {
        let store = store();
        store.invalidate(&["no_such_tag".to_string()]).await.unwrap();
    }

    #[tokio::test]
    async fn creates_assign_monotonic_ids() {
        let store = store();
        let a = store.create("a".to_string()).await.unwrap();
        let b = store.create("b".to_string()).await.unwrap();
        assert!(b.id > a.id);
    }
}
