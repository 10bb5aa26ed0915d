use serde::{Deserialize, Serialize};

/// Body of `PUT /api/quote/{id}`: full replace of the quote text.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateQuoteRequest {
    pub quote: String,
}
