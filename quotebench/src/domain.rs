use chrono::{DateTime, Utc};
use shared::TtlMs;

/// The single record this system manages. Identifier uniqueness is owned by
/// the store, not by this code.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub id: i64,
    pub quote: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(id: i64, quote: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            quote: quote.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Caching directives passed through to the store on reads: how long the
/// cached result stays valid and which invalidation tags it is filed under.
#[derive(Clone, Debug)]
pub struct CacheStrategy {
    pub ttl: TtlMs,
    pub tags: Vec<String>,
}

impl CacheStrategy {
    pub fn new(ttl: TtlMs, tags: Vec<String>) -> Self {
        Self { ttl, tags }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Metadata the store reports alongside a cached read.
#[derive(Clone, Copy, Debug)]
pub struct CacheReadInfo {
    pub status: CacheStatus,
}

impl CacheReadInfo {
    pub fn hit() -> Self {
        Self {
            status: CacheStatus::Hit,
        }
    }

    pub fn miss() -> Self {
        Self {
            status: CacheStatus::Miss,
        }
    }
}

/// A read through the cache-aware path. A missing record is an empty read,
/// not an error.
#[derive(Clone, Debug)]
pub struct CacheRead<T> {
    pub data: Option<T>,
    pub info: CacheReadInfo,
}

impl<T> CacheRead<T> {
    pub fn new(data: Option<T>, info: CacheReadInfo) -> Self {
        Self { data, info }
    }
}
