// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalidation was called again before the store's minimum interval
    /// elapsed. Distinguished so callers can surface it separately.
    #[error("cache invalidation rate limit reached")]
    RateLimited,
    #[error("quote not found: {0}")]
    QuoteNotFound(i64),
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Time-to-live in milliseconds for cached reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlMs(pub u64);

impl TtlMs {
    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

pub mod config;
