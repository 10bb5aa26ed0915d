pub mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use shared_http::api::{QuoteData, QuoteReadResponse};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {0}")]
    Status(reqwest::StatusCode),
    #[error("server returned an empty read")]
    EmptyRead,
}

impl ApiError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::Status(s) if *s == reqwest::StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Port over the server's quote API so the harness can be exercised without
/// a network.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// `GET /api/quote/create`
    async fn create_quote(&self) -> Result<QuoteReadResponse, ApiError>;

    /// `GET /api/quote/{id}`
    async fn get_quote(&self, id: i64) -> Result<QuoteReadResponse, ApiError>;

    /// `PUT /api/quote/{id}`
    async fn update_quote(&self, id: i64, quote: &str) -> Result<QuoteData, ApiError>;

    /// `POST /api/invalidate`
    async fn invalidate(&self) -> Result<(), ApiError>;
}
