use crate::domain::{CacheRead, CacheStrategy, Quote};
use crate::ports::QuoteStore;
use rand::Rng;
use shared::{Error, Result, TtlMs};
use std::sync::Arc;

/// Tag every cached quote read is filed under; invalidation targets it.
pub const QUOTE_TAG: &str = "quote_by_id";

/// Application service that orchestrates quote operations against the
/// cache-aware store. This is the entry point the HTTP handlers call into.
#[derive(Clone)]
pub struct QuoteOperationsService {
    store: Arc<dyn QuoteStore>,
    cache_ttl: TtlMs,
}

impl QuoteOperationsService {
    pub fn new(store: Arc<dyn QuoteStore>, cache_ttl: TtlMs) -> Self {
        Self { store, cache_ttl }
    }

    fn strategy(&self) -> CacheStrategy {
        CacheStrategy::new(self.cache_ttl, vec![QUOTE_TAG.to_string()])
    }

    /// Create a quote with placeholder text, then immediately read it back
    /// through the cached path so the read gets cached under [`QUOTE_TAG`].
    pub async fn create_and_get(&self) -> Result<CacheRead<Quote>> {
        let created = self.store.create(placeholder_quote()).await?;
        self.store.get(created.id, &self.strategy()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CacheRead<Quote>> {
        self.store.get(id, &self.strategy()).await
    }

    /// Full replace of the quote text. Last write wins; the cached read stays
    /// stale until TTL expiry or invalidation.
    pub async fn update_by_id(&self, id: i64, quote: String) -> Result<Quote> {
        self.store.update(id, quote).await
    }

    /// Invalidate every cached read tagged [`QUOTE_TAG`]. A rate-limit error
    /// is logged distinctly but still returned to the caller.
    pub async fn invalidate(&self) -> Result<()> {
        match self.store.invalidate(&[QUOTE_TAG.to_string()]).await {
            Ok(()) => {
                tracing::info!("cache invalidated for tag '{}'", QUOTE_TAG);
                Ok(())
            }
            Err(Error::RateLimited) => {
                tracing::warn!("cache invalidation rate limit reached, try again shortly");
                Err(Error::RateLimited)
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for QuoteOperationsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteOperationsService")
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

/// Placeholder text in the demo's "Random Number" format.
pub fn placeholder_quote() -> String {
    let n = rand::rng().random_range(100_000..200_000);
    format!("This is a quote - Random Number: {}", n)
}
