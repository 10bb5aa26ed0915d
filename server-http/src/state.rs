use accel_store::MokaQuoteStore;
use quotebench::ops::QuoteOperationsService;
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteOperationsService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(MokaQuoteStore::new(Duration::from_millis(
            config.invalidate_min_interval_ms,
        )));
        let quotes = Arc::new(QuoteOperationsService::new(store, config.cache_ttl));
        Self { quotes }
    }
}
