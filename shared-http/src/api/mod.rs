pub mod requests;
pub mod responses;

pub use requests::UpdateQuoteRequest;
pub use responses::{
    CacheReadInfo, CacheStatus, ErrorResponse, HealthResponse, QuoteData, QuoteReadResponse,
};
