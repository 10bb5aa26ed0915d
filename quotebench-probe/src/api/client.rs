use super::{ApiError, QuoteApi};
use async_trait::async_trait;
use reqwest::{Client, Response};
use shared_http::api::{QuoteData, QuoteReadResponse, UpdateQuoteRequest};

/// Reqwest-backed client for the quote API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status))
        }
    }
}

#[async_trait]
impl QuoteApi for ApiClient {
    async fn create_quote(&self) -> Result<QuoteReadResponse, ApiError> {
        let response = self.client.get(self.url("/api/quote/create")).send().await?;
        Ok(Self::check_status(response)?.json().await?)
    }

    async fn get_quote(&self, id: i64) -> Result<QuoteReadResponse, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/quote/{id}")))
            .send()
            .await?;
        Ok(Self::check_status(response)?.json().await?)
    }

    async fn update_quote(&self, id: i64, quote: &str) -> Result<QuoteData, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/quote/{id}")))
            .json(&UpdateQuoteRequest {
                quote: quote.to_string(),
            })
            .send()
            .await?;
        Ok(Self::check_status(response)?.json().await?)
    }

    async fn invalidate(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.url("/api/invalidate")).send().await?;
        Self::check_status(response)?;
        Ok(())
    }
}
