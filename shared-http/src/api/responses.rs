use chrono::{DateTime, Utc};
use quotebench::domain;
use serde::{Deserialize, Serialize};

/// Wire form of a quote record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteData {
    pub id: i64,
    pub quote: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<domain::Quote> for QuoteData {
    fn from(quote: domain::Quote) -> Self {
        Self {
            id: quote.id,
            quote: quote.quote,
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl From<domain::CacheStatus> for CacheStatus {
    fn from(status: domain::CacheStatus) -> Self {
        match status {
            domain::CacheStatus::Hit => CacheStatus::Hit,
            domain::CacheStatus::Miss => CacheStatus::Miss,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CacheReadInfo {
    pub cache_status: CacheStatus,
}

/// Body of the cached read routes: the record (or null for a missing id)
/// plus the store's read metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteReadResponse {
    pub data: Option<QuoteData>,
    pub info: CacheReadInfo,
}

impl From<domain::CacheRead<domain::Quote>> for QuoteReadResponse {
    fn from(read: domain::CacheRead<domain::Quote>) -> Self {
        Self {
            data: read.data.map(QuoteData::from),
            info: CacheReadInfo {
                cache_status: read.info.status.into(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
